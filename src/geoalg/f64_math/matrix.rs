use crate::error::{Error, Result};
use super::optimized_functions::dot_product_of_vector_slices;

/// Pivots smaller than this fraction of the largest entry are treated as zero.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Matrix is implemented as a single dimensional vector of f64s.
/// This implementation of Matrix is row-major,
/// so each observation of a design matrix is a contiguous slice.
#[derive(PartialEq, Debug, Clone)]
pub struct Matrix {
    pub rows: usize,
    pub columns: usize,
    pub values: Vec<f64>
}

fn dimension_mismatch(expected: String, actual: String) -> Error {
    Error::DimensionMismatch { expected, actual }
}

impl Matrix {
    /// Create a matrix from a row-major vector.
    /// # Arguments
    /// * `values` - Elements laid out row after row.
    /// # Returns
    /// Fails when `rows * columns` does not match the number of values.
    pub fn from_vec(values: Vec<f64>, rows: usize, columns: usize) -> Result<Self> {
        if rows * columns != values.len() {
            return Err(dimension_mismatch(
                format!("{} values for {rows} x {columns}", rows * columns),
                format!("{} values", values.len())));
        }

        Ok(Matrix {
            rows,
            columns,
            values
        })
    }

    /// Creates a matrix with rows * columns elements where every element is zero
    pub fn new_zeroed(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            rows,
            values: vec![0.0f64; rows * columns]
        }
    }

    /// Identity matrix of order n.
    pub fn new_identity(n: usize) -> Self {
        let values = (0..n*n)
            .map(|i| if i % (n + 1) == 0 { 1.0 } else { 0.0 })
            .collect();

        Self {
            columns: n,
            rows: n,
            values
        }
    }

    /// Builds a matrix whose columns are the given slices.
    /// # Returns
    /// Fails when the columns are not all the same length.
    pub fn from_columns(columns: &[&[f64]]) -> Result<Self> {
        let rows = columns.first().map_or(0, |c| c.len());
        if let Some(bad) = columns.iter().find(|c| c.len() != rows) {
            return Err(dimension_mismatch(
                format!("columns of length {rows}"),
                format!("column of length {}", bad.len())));
        }

        let mut values = Vec::with_capacity(rows * columns.len());
        for row in 0..rows {
            values.extend(columns.iter().map(|c| c[row]));
        }

        Ok(Matrix {
            rows,
            columns: columns.len(),
            values
        })
    }

    /// Returns slice of matrix that is a row of the matrix
    pub fn get_row_vector_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "Tried to get a row that was out of bounds.");

        let start = row * self.columns;
        let end = start + self.columns;
        &self.values[start..end]
    }

    /// Copies out a single column, since columns are strided in row-major storage.
    pub fn column(&self, column: usize) -> Vec<f64> {
        assert!(column < self.columns, "Tried to get a column that was out of bounds.");

        self.values.iter()
            .skip(column)
            .step_by(self.columns)
            .copied()
            .collect()
    }

    /// Returns a newly allocated matrix that is the transpose of the matrix operated on.
    pub fn get_transpose(&self) -> Matrix {
        let capacity = self.rows * self.columns;
        let mut transposed = Vec::with_capacity(capacity);

        for i in 0..capacity {
            let index_to_push = self.columns * (i % self.rows) + i / self.rows;
            transposed.push(self.values[index_to_push]);
        }

        Matrix {
            columns: self.rows,
            rows: self.columns,
            values: transposed
        }
    }

    /// Multiplies two matrices using transpose operation for efficiency.
    /// # Returns
    /// Fails unless lhs columns equal rhs rows.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.columns != rhs.rows {
            return Err(dimension_mismatch(
                format!("rhs with {} rows", self.columns),
                format!("rhs with {} rows", rhs.rows)));
        }

        let mut floats = Vec::with_capacity(rhs.columns * self.rows);
        let t = rhs.get_transpose();

        for row in 0..self.rows {
            let ls = self.get_row_vector_slice(row);
            for t_row in 0..t.rows {
                let rs = t.get_row_vector_slice(t_row);
                floats.push(dot_product_of_vector_slices(ls, rs));
            }
        }

        Ok(Matrix {
            columns: rhs.columns,
            rows: self.rows,
            values: floats
        })
    }

    /// Matrix-vector product, one dot product per row.
    pub fn mul_vector(&self, rhs: &[f64]) -> Result<Vec<f64>> {
        if self.columns != rhs.len() {
            return Err(dimension_mismatch(
                format!("vector of length {}", self.columns),
                format!("vector of length {}", rhs.len())));
        }

        Ok((0..self.rows)
            .map(|row| dot_product_of_vector_slices(self.get_row_vector_slice(row), rhs))
            .collect())
    }

    /// Prepends a column of ones, turning a feature matrix into a design matrix with an intercept.
    pub fn with_leading_ones(&self) -> Matrix {
        let mut values = Vec::with_capacity(self.rows * (self.columns + 1));
        for row in 0..self.rows {
            values.push(1.0);
            values.extend_from_slice(self.get_row_vector_slice(row));
        }

        Matrix {
            rows: self.rows,
            columns: self.columns + 1,
            values
        }
    }

    /// Solves `self * x = rhs` for a square matrix by Gaussian elimination with partial pivoting.
    /// # Arguments
    /// * `rhs` - Right hand side, one entry per row.
    /// # Returns
    /// The solution vector, or `SingularMatrix` when a pivot vanishes
    /// relative to the largest entry.
    pub fn solve(&self, rhs: &[f64]) -> Result<Vec<f64>> {
        if self.rows != self.columns {
            return Err(dimension_mismatch("square matrix".to_string(), self.shape()));
        }
        if rhs.len() != self.rows {
            return Err(dimension_mismatch(
                format!("rhs of length {}", self.rows),
                format!("rhs of length {}", rhs.len())));
        }

        let n = self.rows;
        let mut a = self.values.clone();
        let mut b = rhs.to_vec();

        let scale = a.iter().fold(0.0f64, |m, x| m.max(x.abs()));
        if scale == 0.0 {
            return Err(Error::SingularMatrix);
        }
        let tolerance = scale * SINGULAR_TOLERANCE;

        for pivot in 0..n {
            let (best, best_value) = (pivot..n)
                .map(|row| (row, a[row * n + pivot].abs()))
                .fold((pivot, -1.0), |acc, cur| if cur.1 > acc.1 { cur } else { acc });

            if best_value <= tolerance {
                return Err(Error::SingularMatrix);
            }

            if best != pivot {
                for column in 0..n {
                    a.swap(pivot * n + column, best * n + column);
                }
                b.swap(pivot, best);
            }

            let diagonal = a[pivot * n + pivot];
            for row in (pivot + 1)..n {
                let factor = a[row * n + pivot] / diagonal;
                if factor == 0.0 {
                    continue;
                }

                for column in pivot..n {
                    a[row * n + column] -= factor * a[pivot * n + column];
                }
                b[row] -= factor * b[pivot];
            }
        }

        // Back substitution
        let mut x = vec![0.0f64; n];
        for row in (0..n).rev() {
            let upper = &a[row * n + row + 1..(row + 1) * n];
            let tail = dot_product_of_vector_slices(upper, &x[row + 1..]);
            x[row] = (b[row] - tail) / a[row * n + row];
        }

        Ok(x)
    }

    pub fn shape(&self) -> String {
        let rows = self.rows;
        let columns = self.columns;
        format!("{rows} x {columns}")
    }
}

impl From<Vec<f64>> for Matrix {
    fn from(vec: Vec<f64>) -> Self {
        Matrix {
            rows: vec.len(),
            columns: 1,
            values: vec
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn transpose_test() {
        let m = Matrix {
            rows: 5,
            columns: 4,
            values: vec![
                0f64, 1f64, 2f64, 3f64,
                4f64, 5f64, 6f64, 7f64,
                8f64, 9f64, 10f64, 11f64,
                12f64, 13f64, 14f64, 15f64,
                16f64, 17f64, 18f64, 19f64
            ]
        };

        let expected = Matrix {
            rows: 4,
            columns: 5,
            values: vec![
                0f64, 4f64, 8f64, 12f64, 16f64,
                1f64, 5f64, 9f64, 13f64, 17f64,
                2f64, 6f64, 10f64, 14f64, 18f64,
                3f64, 7f64, 11f64, 15f64, 19f64
            ]
        };

        let actual = m.get_transpose();
        assert_eq!(actual, expected);
    }

    #[test]
    fn identity_3() {
        let actual = Matrix::new_identity(3);
        let expected = Matrix {
            rows: 3,
            columns: 3,
            values: vec![
                1.0f64, 0.0f64, 0.0f64,
                0.0f64, 1.0f64, 0.0f64,
                0.0f64, 0.0f64, 1.0f64]
        };

        assert_eq!(actual, expected);
    }

    #[test]
    fn from_vec_rejects_wrong_count() {
        let actual = Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2);
        assert!(matches!(actual, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn from_columns_interleaves() {
        let actual = Matrix::from_columns(&[&[1.0, 2.0], &[10.0, 20.0], &[100.0, 200.0]]).unwrap();
        let expected = Matrix::from_vec(vec![
            1.0, 10.0, 100.0,
            2.0, 20.0, 200.0], 2, 3).unwrap();

        assert_eq!(actual, expected);
        assert_eq!(actual.column(1), vec![10.0, 20.0]);
    }

    #[test]
    fn matrix_mul() {
        let lhs = Matrix {
            rows: 4,
            columns: 3,
            values: vec![
                1f64, 2f64, 3f64,
                4f64, 5f64, 6f64,
                7f64, 8f64, 9f64,
                10f64, 11f64, 12f64]
        };

        let rhs = Matrix {
            rows: 3,
            columns: 5,
            values: vec![
                1f64, 2f64, 3f64, 4f64, 5f64,
                6f64, 7f64, 8f64, 9f64, 10f64,
                11f64, 12f64, 13f64, 14f64, 15f64
            ]
        };

        // Resultant matrix needs to have as many rows as lhs, and as many columns as rhs.
        let expected = Matrix {
            rows: 4,
            columns: 5,
            values: vec! [
                46f64, 52f64, 58f64, 64f64, 70f64,
                100f64, 115f64, 130f64, 145f64, 160f64,
                154f64, 178f64, 202f64, 226f64, 250f64,
                208f64, 241f64, 274f64, 307f64, 340f64
            ]
        };

        let actual = lhs.mul(&rhs).unwrap();
        assert_eq!(actual, expected);

        assert!(rhs.mul(&rhs).is_err());
    }

    #[test]
    fn leading_ones() {
        let m = Matrix::from_vec(vec![3.0, 4.0, 5.0, 6.0], 2, 2).unwrap();
        let expected = Matrix::from_vec(vec![1.0, 3.0, 4.0, 1.0, 5.0, 6.0], 2, 3).unwrap();

        assert_eq!(m.with_leading_ones(), expected);
    }

    #[test]
    fn solve_needs_pivoting() {
        // Zero in the top-left forces a row swap.
        let a = Matrix::from_vec(vec![
            0.0, 2.0, 1.0,
            1.0, 1.0, 1.0,
            2.0, 1.0, 3.0], 3, 3).unwrap();
        let expected = [1.0, -2.0, 3.0];
        let rhs = a.mul_vector(&expected).unwrap();

        let actual = a.solve(&rhs).unwrap();
        for (x, e) in actual.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(x, e, epsilon = 1e-10);
        }
    }

    #[test]
    fn solve_identity_returns_rhs() {
        let actual = Matrix::new_identity(4).solve(&[4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(actual, vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn solve_singular() {
        let a = Matrix::from_vec(vec![
            1.0, 2.0,
            2.0, 4.0], 2, 2).unwrap();

        assert!(matches!(a.solve(&[1.0, 2.0]), Err(Error::SingularMatrix)));
        assert!(matches!(Matrix::new_zeroed(2, 2).solve(&[0.0, 0.0]), Err(Error::SingularMatrix)));
    }

    #[test]
    fn solve_rejects_non_square() {
        let a = Matrix::new_zeroed(2, 3);
        assert!(matches!(a.solve(&[1.0, 2.0]), Err(Error::DimensionMismatch { .. })));
    }
}
