use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use super::frame::{Column, Table};

impl Table {
    /// Opens a CSV file with a header line and loads it into a table.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Table> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Table::from_reader(BufReader::new(file))?;

        let (rows, columns) = table.shape();
        info!(path = %path.display(), rows, columns, "loaded table");

        Ok(table)
    }

    /// Reads CSV from any reader. The first line names the columns.
    /// A column whose non-empty cells all parse as f64 becomes numeric,
    /// with empty cells stored as NaN.
    /// Every other column is kept as text.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for record in csv_reader.records() {
            let record = record?;
            for (column, value) in cells.iter_mut().zip(record.iter()) {
                column.push(value.to_string());
            }
        }

        let named_columns = headers.into_iter()
            .zip(cells)
            .map(|(name, raw)| {
                let column = parse_column(raw);
                if let Column::Text(values) = &column {
                    if values.iter().any(String::is_empty) {
                        warn!(column = %name, "text column has empty cells");
                    }
                }
                (name, column)
            })
            .collect();

        Table::new(named_columns)
    }
}

fn parse_column(raw: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = raw.iter()
        .map(|cell| if cell.is_empty() { Some(f64::NAN) } else { cell.parse::<f64>().ok() })
        .collect();

    match parsed {
        Some(values) => Column::Numeric(values),
        None => Column::Text(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const HOUSES: &str = "\
id,date,price,bedrooms,sqft_living
7129300520,20141013T000000,221900,3,1180
6414100192,20141209T000000,538000,3,2570
5631500400,20150225T000000,180000,2,
";

    #[test]
    fn test_infers_column_types() {
        let table = Table::from_reader(HOUSES.as_bytes()).unwrap();

        assert_eq!(table.shape(), (3, 5));
        assert_eq!(table.numeric("price").unwrap(), &[221900.0, 538000.0, 180000.0]);
        assert!(matches!(table.column("date").unwrap(), Column::Text(_)));
        // Ids look numeric, so they load as numbers.
        assert!(table.numeric("id").is_ok());
    }

    #[test]
    fn test_empty_cells_become_nan() {
        let table = Table::from_reader(HOUSES.as_bytes()).unwrap();
        let sqft = table.numeric("sqft_living").unwrap();

        assert_eq!(&sqft[..2], &[1180.0, 2570.0]);
        assert!(sqft[2].is_nan());
    }

    #[test]
    fn test_ragged_rows_fail() {
        let ragged = "a,b\n1,2\n3\n";
        assert!(matches!(Table::from_reader(ragged.as_bytes()), Err(Error::Csv(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(Table::from_csv_path("./tests/no_such_file.csv"), Err(Error::Io(_))));
    }
}
