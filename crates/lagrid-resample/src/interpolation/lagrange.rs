use num_traits::Float;

/// Evaluate the Lagrange interpolating polynomial at `xi`.
///
/// The samples are taken as the values of the polynomial at the equally
/// spaced nodes `0, 1, ..., n - 1`. The query position may fall outside
/// `[0, n - 1]`, in which case the polynomial is extrapolated; this is
/// what happens near the axis boundaries of a resampling pass.
///
/// # Arguments
///
/// * `samples` - The sample values at the integer nodes. Must be non-empty.
/// * `xi` - The query position in node coordinates.
///
/// # Returns
///
/// The value at `xi` of the unique degree `n - 1` polynomial through the
/// samples. Evaluation is O(n^2), acceptable for the small windows the
/// resampler selects.
pub fn lagrange<T: Float>(samples: &[T], xi: T) -> T {
    let mut ret = T::zero();
    for (i, &yi) in samples.iter().enumerate() {
        let node_i = T::from(i).unwrap();
        let mut term = yi;
        for j in 0..samples.len() {
            if i == j {
                continue;
            }
            let node_j = T::from(j).unwrap();
            term = term * (xi - node_j) / (node_i - node_j);
        }
        ret = ret + term;
    }
    ret
}
