//! Credit-weighted averaging shared by the GPA and CGPA computations.

/// Computes the weighted average of `values`, weighting index `i` by
/// `weights[i]`. Returns `(average, total_weight)`.
///
/// A zero total weight (empty input, or every weight zero) yields `(0.0, 0.0)`
/// instead of dividing by zero; callers treat this as a defined result.
///
/// # Panics
///
/// Panics if the two slices differ in length.
pub fn weighted_average(values: &[f64], weights: &[f64]) -> (f64, f64) {
    assert_eq!(
        values.len(),
        weights.len(),
        "values and weights must be paired positionally"
    );

    let mut weighted_total = 0.0;
    let mut weight_sum = 0.0;

    for (value, weight) in values.iter().zip(weights) {
        weighted_total += value * weight;
        weight_sum += weight;
    }

    if weight_sum == 0.0 {
        return (0.0, 0.0);
    }

    (weighted_total / weight_sum, weight_sum)
}
