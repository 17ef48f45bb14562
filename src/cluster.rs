use crate::config::Tolerance;
use crate::dataset::PointSet;
use crate::distance::{all_close, euclidean_distance};
use crate::error::KMeansError;
use ndarray::{Array1, Array2, ArrayView1, AsArray, Axis};
use std::fmt;

/// A subset of a [`PointSet`], identified by point indices, together with a
/// centroid.
///
/// The centroid is generally not a dataset point; it is the mean of the
/// members after [`Cluster::recompute_centroid`].
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    dataset: &'a PointSet,
    centroid: Array1<f64>,
    members: Vec<usize>,
    tolerance: Tolerance,
}

impl<'a> Cluster<'a> {
    /// Create an empty cluster with the given centroid.
    ///
    /// # Errors
    ///
    /// Returns an error if the centroid's length differs from the dataset
    /// dimension or it holds a non-finite coordinate.
    pub fn new<'c, V>(dataset: &'a PointSet, centroid: V) -> Result<Self, KMeansError>
    where
        V: AsArray<'c, f64>,
    {
        let centroid: ArrayView1<f64> = centroid.into();
        if centroid.len() != dataset.dimension() {
            return Err(KMeansError::InvalidDimensions(format!(
                "Centroid has {} coordinates, dataset dimension is {}",
                centroid.len(),
                dataset.dimension()
            )));
        }
        if let Some(value) = centroid.iter().find(|v| !v.is_finite()) {
            return Err(KMeansError::InvalidPoint(format!(
                "centroid has non-finite coordinate {}",
                value
            )));
        }

        Ok(Self {
            dataset,
            centroid: centroid.to_owned(),
            members: Vec::new(),
            tolerance: Tolerance::default(),
        })
    }

    /// Replace the tolerance used by [`Cluster::recompute_centroid`].
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn centroid(&self) -> ArrayView1<'_, f64> {
        self.centroid.view()
    }

    /// Dataset indices of the current members, in insertion order.
    pub fn member_indices(&self) -> &[usize] {
        &self.members
    }

    pub fn dataset(&self) -> &'a PointSet {
        self.dataset
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Euclidean distance from `point` to the centroid.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidDimensions`] if the point's length differs
    /// from the centroid's.
    pub fn distance_to<'p, V>(&self, point: V) -> Result<f64, KMeansError>
    where
        V: AsArray<'p, f64>,
    {
        let point: ArrayView1<f64> = point.into();
        if point.len() != self.centroid.len() {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} coordinates, got {}",
                self.centroid.len(),
                point.len()
            )));
        }
        Ok(euclidean_distance(&point, &self.centroid.view()))
    }

    /// Adds a dataset index to this cluster. Re-adding a member is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidIndex`] if `index >= dataset.size()`.
    pub fn add_member(&mut self, index: usize) -> Result<(), KMeansError> {
        if index >= self.dataset.size() {
            return Err(KMeansError::InvalidIndex(format!(
                "index {} is not below dataset size {}",
                index,
                self.dataset.size()
            )));
        }
        if !self.members.contains(&index) {
            self.members.push(index);
        }
        Ok(())
    }

    /// Replaces the membership wholesale. The caller guarantees the indices
    /// are valid and unique.
    pub(crate) fn set_members(&mut self, members: Vec<usize>) {
        debug_assert!(members.iter().all(|&i| i < self.dataset.size()));
        self.members = members;
    }

    /// Removes all members; the centroid is untouched.
    pub fn clear_members(&mut self) {
        self.members.clear();
    }

    /// Fresh copy of the member points, one per row, in membership order.
    pub fn member_points(&self) -> Array2<f64> {
        self.dataset.contents().select(Axis(0), &self.members)
    }

    /// Maximum distance from any member to the centroid, 0.0 when empty.
    pub fn radius(&self) -> f64 {
        let centroid = self.centroid.view();
        self.members
            .iter()
            .map(|&i| euclidean_distance(&self.dataset.contents().row(i), &centroid))
            .fold(0.0, f64::max)
    }

    /// Moves the centroid to the mean of the current members.
    ///
    /// Returns `true` if the new mean is close to the previous centroid
    /// (the centroid was stable), `false` if it moved. An empty cluster keeps
    /// its centroid and reports `true`.
    pub fn recompute_centroid(&mut self) -> bool {
        let mean = match self.member_points().mean_axis(Axis(0)) {
            Some(mean) => mean,
            None => return true,
        };

        let stable = all_close(&self.centroid.view(), &mean.view(), &self.tolerance);
        self.centroid = mean;
        stable
    }
}

impl fmt::Display for Cluster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.centroid, self.members)
    }
}
