//! Column-oriented in-memory table.
//!
//! Columns are either numeric or text. Numeric columns use `NaN` for missing cells,
//! and [`Table::drop_missing`] removes those rows before modelling.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::geoalg::f64_math::matrix::Matrix;
use crate::geoalg::f64_math::optimized_functions::mean;

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Column::Numeric(values) => Some(values),
            Column::Text(_) => None,
        }
    }

    fn take(&self, rows: &[usize]) -> Column {
        match self {
            Column::Numeric(values) => Column::Numeric(rows.iter().map(|&r| values[r]).collect()),
            Column::Text(values) => Column::Text(rows.iter().map(|&r| values[r].clone()).collect()),
        }
    }

    fn cell(&self, row: usize) -> String {
        match self {
            Column::Numeric(values) if values[row].is_nan() => "NaN".to_string(),
            Column::Numeric(values) => format!("{}", values[row]),
            Column::Text(values) => values[row].clone(),
        }
    }
}

/// Summary statistics of one numeric column, skipping missing values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); NaN below two values.
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table from named columns, rejecting duplicate names and ragged columns.
    pub fn new(named_columns: Vec<(String, Column)>) -> Result<Table> {
        let rows = named_columns.first().map_or(0, |(_, c)| c.len());

        {
            let mut seen = HashSet::new();
            for (name, column) in &named_columns {
                if !seen.insert(name.as_str()) {
                    return Err(Error::DuplicateColumn(name.clone()));
                }
                if column.len() != rows {
                    return Err(Error::DimensionMismatch {
                        expected: format!("{rows} rows"),
                        actual: format!("{} rows in `{name}`", column.len()),
                    });
                }
            }
        }

        let (names, columns) = named_columns.into_iter().unzip();
        Ok(Table { names, columns })
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.columns.len())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.names.iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        self.column(name)?
            .as_numeric()
            .ok_or_else(|| Error::NotNumeric(name.to_string()))
    }

    /// New table with only the named columns, in the order given.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let named_columns = names.iter()
            .map(|&name| Ok((name.to_string(), self.column(name)?.clone())))
            .collect::<Result<Vec<_>>>()?;

        Table::new(named_columns)
    }

    /// New table holding the given rows in the given order.
    /// Panics if a row index is out of bounds.
    pub fn take_rows(&self, rows: &[usize]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(rows)).collect(),
        }
    }

    /// First `n` rows (or all of them if fewer).
    pub fn head(&self, n: usize) -> Table {
        let rows: Vec<usize> = (0..n.min(self.row_count())).collect();
        self.take_rows(&rows)
    }

    /// Keeps rows whose value in the numeric `column` satisfies `predicate`.
    pub fn filter(&self, column: &str, predicate: impl Fn(f64) -> bool) -> Result<Table> {
        let values = self.numeric(column)?;
        let rows: Vec<usize> = values.iter()
            .enumerate()
            .filter(|&(_, &v)| predicate(v))
            .map(|(i, _)| i)
            .collect();

        Ok(self.take_rows(&rows))
    }

    /// Drops rows holding NaN in any of the named numeric columns.
    pub fn drop_missing(&self, names: &[&str]) -> Result<Table> {
        let checked = names.iter()
            .map(|&name| self.numeric(name))
            .collect::<Result<Vec<_>>>()?;

        let rows: Vec<usize> = (0..self.row_count())
            .filter(|&row| checked.iter().all(|values| !values[row].is_nan()))
            .collect();

        Ok(self.take_rows(&rows))
    }

    /// Summaries for every numeric column, in column order.
    pub fn describe(&self) -> Vec<ColumnSummary> {
        self.names.iter()
            .zip(self.columns.iter())
            .filter_map(|(name, column)| column.as_numeric().map(|values| summarize(name, values)))
            .collect()
    }

    /// Feature matrix with one column per named feature.
    pub fn design_matrix(&self, features: &[&str]) -> Result<Matrix> {
        let columns = features.iter()
            .map(|&name| self.numeric(name))
            .collect::<Result<Vec<_>>>()?;

        if columns.is_empty() {
            return Ok(Matrix::new_zeroed(self.row_count(), 0));
        }

        Matrix::from_columns(&columns)
    }

    pub fn target(&self, name: &str) -> Result<Vec<f64>> {
        self.numeric(name).map(<[f64]>::to_vec)
    }
}

fn summarize(name: &str, values: &[f64]) -> ColumnSummary {
    let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    let count = present.len();
    let mean = mean(&present).unwrap_or(f64::NAN);

    let std = if count > 1 {
        let ss = present.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        (ss / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    let (min, max) = if count == 0 {
        (f64::NAN, f64::NAN)
    } else {
        present.iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    };

    ColumnSummary { name: name.to_string(), count, mean, std, min, max }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.names.join("\t"))?;

        for row in 0..self.row_count() {
            let cells: Vec<String> = self.columns.iter().map(|c| c.cell(row)).collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }

        write!(f, "[{} rows x {} columns]", self.row_count(), self.columns.len())
    }
}
