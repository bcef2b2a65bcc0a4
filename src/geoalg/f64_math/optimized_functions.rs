const ROWS_DIFFERENT_LENGTHS: &str = "Cannot take dot product of two &[f64] of unequal length.";

/// Dot product of two f64 slices of equal length.
pub fn dot_product_of_vector_slices(lhs: &[f64], rhs: &[f64]) -> f64 {
    assert_eq!(lhs.len(), rhs.len(), "{}", ROWS_DIFFERENT_LENGTHS);

    lhs.iter()
        .zip(rhs.iter())
        .map(|(x, y)| x * y)
        .sum()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product_of_slices() {
        let lhs = &[1., 2., 3., 4.];
        let rhs = &[10., 20., 30., 40.];

        let actual = dot_product_of_vector_slices(lhs, rhs);
        let expected = 300.;

        assert_eq!(actual, expected);
    }

    #[test]
    #[should_panic]
    fn test_invalid_dot_product() {
        let lhs = &[1., 2.];
        let rhs = &[10., 20., 30.];

        dot_product_of_vector_slices(lhs, rhs);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1., 2., 3., 6.]), Some(3.));
        assert_eq!(mean(&[]), None);
    }
}
