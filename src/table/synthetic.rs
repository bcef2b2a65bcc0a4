use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal, Uniform};

use crate::error::Result;
use super::frame::{Column, Table};

/// Known coefficients of the generated price model: intercept, sqft_living, bedrooms, bathrooms.
pub const HOUSING_COEFFICIENTS: [f64; 4] = [50_000.0, 180.0, -12_000.0, 8_000.0];

/// Standard deviation of the noise added to price.
pub const PRICE_NOISE: f64 = 40_000.0;

/// Reproducible housing-like data with columns `sqft_living`, `bedrooms`, `bathrooms` and `price`.
/// Price is linear in the three features plus Gaussian noise, so least squares should recover
/// [`HOUSING_COEFFICIENTS`] approximately.
pub fn housing(rows: usize, seed: u64) -> Result<Table> {
    let mut rng = StdRng::seed_from_u64(seed);
    let sqft_step = Uniform::new_inclusive(600.0f64, 4500.0f64);

    let mut sqft_living = Vec::with_capacity(rows);
    let mut bedrooms = Vec::with_capacity(rows);
    let mut bathrooms = Vec::with_capacity(rows);
    let mut price = Vec::with_capacity(rows);

    for _ in 0..rows {
        let sqft = sqft_step.sample(&mut rng).round();
        let beds = (sqft / 800.0).floor().clamp(1.0, 5.0) + rng.gen_range(0..2) as f64;
        let baths = 1.0 + 0.25 * rng.gen_range(0..=(sqft / 400.0) as u32).min(12) as f64;

        let [b0, b_sqft, b_beds, b_baths] = HOUSING_COEFFICIENTS;
        let noise: f64 = rng.sample(StandardNormal);
        let value = b0 + b_sqft * sqft + b_beds * beds + b_baths * baths + PRICE_NOISE * noise;

        sqft_living.push(sqft);
        bedrooms.push(beds);
        bathrooms.push(baths);
        price.push(value.round());
    }

    Table::new(vec![
        ("sqft_living".to_string(), Column::Numeric(sqft_living)),
        ("bedrooms".to_string(), Column::Numeric(bedrooms)),
        ("bathrooms".to_string(), Column::Numeric(bathrooms)),
        ("price".to_string(), Column::Numeric(price)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_table() {
        assert_eq!(housing(50, 9).unwrap(), housing(50, 9).unwrap());
        assert_ne!(housing(50, 9).unwrap(), housing(50, 10).unwrap());
    }

    #[test]
    fn test_shape_and_ranges() {
        let table = housing(200, 1).unwrap();
        assert_eq!(table.shape(), (200, 4));

        let sqft = table.numeric("sqft_living").unwrap();
        assert!(sqft.iter().all(|&s| (600.0..=4500.0).contains(&s)));

        let beds = table.numeric("bedrooms").unwrap();
        assert!(beds.iter().all(|&b| (1.0..=6.0).contains(&b)));
    }
}
