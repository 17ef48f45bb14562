use crate::config::Tolerance;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Euclidean distance between two points of equal length.
///
/// Callers are responsible for checking the lengths match.
#[inline]
pub fn euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Coordinate-wise closeness test: every pair must satisfy
/// `|old - new| <= atol + rtol * |new|`.
///
/// NaN is never close to anything; equal infinities are.
pub fn all_close(old: &ArrayView1<f64>, new: &ArrayView1<f64>, tol: &Tolerance) -> bool {
    if old.len() != new.len() {
        return false;
    }

    old.iter().zip(new.iter()).all(|(&a, &b)| {
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }
        (a - b).abs() <= tol.atol + tol.rtol * b.abs()
    })
}

/// Find the nearest centroid for each row of `data`.
///
/// Ties go to the lowest centroid index. Callers are responsible for checking
/// that both arrays have the same number of columns.
pub fn find_nearest_centroids(data: &ArrayView2<f64>, centroids: &ArrayView2<f64>) -> Array1<usize> {
    data.outer_iter()
        .map(|point| {
            let mut best_label = 0;
            let mut best_dist = f64::INFINITY;

            for (j, centroid) in centroids.outer_iter().enumerate() {
                let dist = euclidean_distance(&point, &centroid);
                if dist < best_dist {
                    best_dist = dist;
                    best_label = j;
                }
            }

            best_label
        })
        .collect()
}

/// Compute centroid shift (sum of L2 norms of centroid movements)
pub fn compute_centroid_shift(
    old_centroids: &ArrayView2<f64>,
    new_centroids: &ArrayView2<f64>,
) -> f64 {
    old_centroids
        .outer_iter()
        .zip(new_centroids.outer_iter())
        .map(|(old_c, new_c)| euclidean_distance(&old_c, &new_c))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_euclidean_distance() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, 6.0, 3.0];

        assert_relative_eq!(euclidean_distance(&a.view(), &b.view()), 5.0, epsilon = 1e-12);
        assert_relative_eq!(euclidean_distance(&a.view(), &a.view()), 0.0);
    }

    #[test]
    fn test_all_close_within_tolerance() {
        let tol = Tolerance::default();
        let old = array![1.0, 100.0];
        let new = array![1.0 + 5e-9, 100.0 + 5e-4];

        assert!(all_close(&old.view(), &new.view(), &tol));
    }

    #[test]
    fn test_all_close_outside_tolerance() {
        let tol = Tolerance::default();
        let old = array![0.0, 0.0];
        let new = array![0.0, 1e-6];

        assert!(!all_close(&old.view(), &new.view(), &tol));
    }

    #[test]
    fn test_all_close_nan_is_never_close() {
        let tol = Tolerance::default();
        let a = array![f64::NAN];

        assert!(!all_close(&a.view(), &a.view(), &tol));
    }

    #[test]
    fn test_all_close_length_mismatch() {
        let tol = Tolerance::default();
        let a = array![1.0];
        let b = array![1.0, 1.0];

        assert!(!all_close(&a.view(), &b.view(), &tol));
    }

    #[test]
    fn test_find_nearest_centroids() {
        let data = array![[0.0, 0.0], [10.0, 10.0], [5.0, 5.0]];
        let centroids = array![[0.0, 0.0], [10.0, 10.0]];

        let labels = find_nearest_centroids(&data.view(), &centroids.view());

        assert_eq!(labels[0], 0);
        assert_eq!(labels[1], 1);
        // (5,5) is equidistant, the first centroid wins
        assert_eq!(labels[2], 0);
    }

    #[test]
    fn test_centroid_shift() {
        let old = array![[0.0, 0.0], [1.0, 1.0]];
        let new = array![[1.0, 0.0], [1.0, 1.0]];

        let shift = compute_centroid_shift(&old.view(), &new.view());
        assert_relative_eq!(shift, 1.0, epsilon = 1e-12);
    }
}
