use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Error, Result};
use crate::table::Table;

/// Smallest held-out set that every regression metric is defined on.
pub const MIN_TEST_ROWS: usize = 2;

/// Row indices partitioned into a training set and a held-out test set.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

impl TrainTestSplit {
    /// Draws a reproducible split of `count` rows.
    /// Test rows are drawn one at a time from the pool of unused rows,
    /// and whatever remains is the training set.
    /// # Arguments
    /// * `test_fraction` - Share of rows held out, strictly between 0 and 1.
    /// * `seed` - Same seed, same split.
    pub fn new(count: usize, test_fraction: f64, seed: u64) -> Result<Self> {
        if count < MIN_TEST_ROWS + 1 || !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(Error::InvalidSplit { count, fraction: test_fraction });
        }

        // R² on the held-out rows needs two of them; training keeps at least one.
        let test_size = ((count as f64) * test_fraction).round() as usize;
        let test_size = test_size.clamp(MIN_TEST_ROWS, count - 1);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut unused: Vec<usize> = (0..count).collect();
        let mut test = Vec::with_capacity(test_size);
        for _ in 0..test_size {
            let unused_index = rng.gen_range(0..unused.len());
            test.push(unused.swap_remove(unused_index));
        }

        let mut train = unused;
        train.sort_unstable();
        test.sort_unstable();

        debug!(count, train = train.len(), test = test.len(), seed, "split rows");

        Ok(TrainTestSplit { train, test })
    }
}

/// Splits a table into (train, test) tables.
pub fn train_test_split(table: &Table, test_fraction: f64, seed: u64) -> Result<(Table, Table)> {
    let split = TrainTestSplit::new(table.row_count(), test_fraction, seed)?;

    Ok((table.take_rows(&split.train), table.take_rows(&split.test)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_partitions_all_rows() {
        let split = TrainTestSplit::new(11, 0.25, 7).unwrap();

        assert_eq!(split.test.len(), 3);
        assert_eq!(split.train.len(), 8);

        let mut all = split.train.clone();
        all.extend(&split.test);
        all.sort_unstable();
        assert_eq!(all, (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_is_reproducible() {
        let a = TrainTestSplit::new(100, 0.2, 42).unwrap();
        let b = TrainTestSplit::new(100, 0.2, 42).unwrap();
        let c = TrainTestSplit::new(100, 0.2, 43).unwrap();

        assert_eq!(a, b);
        assert_ne!(a.test, c.test);
    }

    #[test]
    fn test_split_keeps_both_sides() {
        let split = TrainTestSplit::new(3, 0.01, 1).unwrap();
        assert_eq!((split.train.len(), split.test.len()), (1, 2));

        let split = TrainTestSplit::new(3, 0.99, 1).unwrap();
        assert_eq!((split.train.len(), split.test.len()), (1, 2));

        // 5 * 0.2 rounds to a single row, which is raised to two.
        let split = TrainTestSplit::new(5, 0.2, 1).unwrap();
        assert_eq!((split.train.len(), split.test.len()), (3, 2));
    }

    #[test]
    fn test_invalid_splits() {
        assert!(matches!(TrainTestSplit::new(1, 0.5, 0), Err(Error::InvalidSplit { .. })));
        let too_small = TrainTestSplit::new(2, 0.5, 0);
        assert!(matches!(too_small, Err(Error::InvalidSplit { count: 2, .. })));
        assert!(TrainTestSplit::new(10, 0.0, 0).is_err());
        assert!(TrainTestSplit::new(10, 1.0, 0).is_err());
        assert!(TrainTestSplit::new(10, f64::NAN, 0).is_err());
    }
}
