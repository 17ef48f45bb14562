use crate::error::KMeansError;
use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut2, Axis};

/// An append-only collection of points sharing one fixed dimension.
///
/// Points are stored as the rows of an `(n, dimension)` array, so the
/// dimension invariant holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    dimension: usize,
    points: Array2<f64>,
}

impl PointSet {
    /// Create an empty point set of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidDimensions`] if `dimension` is 0.
    pub fn new(dimension: usize) -> Result<Self, KMeansError> {
        if dimension == 0 {
            return Err(KMeansError::InvalidDimensions(
                "dimension must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            dimension,
            points: Array2::zeros((0, dimension)),
        })
    }

    /// Create a point set from an initial list of points.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `dimension` is 0
    /// - `points` is empty
    /// - any point's length differs from `dimension`
    /// - any coordinate is not finite
    pub fn with_points<P: AsRef<[f64]>>(dimension: usize, points: &[P]) -> Result<Self, KMeansError> {
        let mut set = Self::new(dimension)?;

        if points.is_empty() {
            return Err(KMeansError::InsufficientData(
                "initial point list is empty".to_string(),
            ));
        }

        // Validate everything before touching the storage
        for (i, point) in points.iter().enumerate() {
            set.check_point(&ArrayView1::from(point.as_ref()))
                .map_err(|e| match e {
                    KMeansError::InvalidDimensions(msg) => {
                        KMeansError::InvalidDimensions(format!("point {}: {}", i, msg))
                    }
                    KMeansError::InvalidPoint(msg) => {
                        KMeansError::InvalidPoint(format!("point {}: {}", i, msg))
                    }
                    other => other,
                })?;
        }

        for point in points {
            set.push_unchecked(ArrayView1::from(point.as_ref()))?;
        }

        Ok(set)
    }

    /// Create a point set whose rows are the rows of `array`.
    /// The dimension is the number of columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no rows or no columns, or holds a
    /// non-finite value.
    pub fn from_array(array: Array2<f64>) -> Result<Self, KMeansError> {
        let dimension = array.ncols();
        if dimension == 0 {
            return Err(KMeansError::InvalidDimensions(
                "dimension must be greater than 0".to_string(),
            ));
        }
        if array.nrows() == 0 {
            return Err(KMeansError::InsufficientData(
                "initial point list is empty".to_string(),
            ));
        }
        if let Some((pos, value)) = array.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(KMeansError::InvalidPoint(format!(
                "point {} has non-finite coordinate {}",
                pos / dimension,
                value
            )));
        }

        Ok(Self {
            dimension,
            points: array.as_standard_layout().into_owned(),
        })
    }

    /// The fixed point dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The current number of points
    pub fn size(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the point at index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::IndexOutOfRange`] if `i >= size()`.
    pub fn get(&self, i: usize) -> Result<ArrayView1<'_, f64>, KMeansError> {
        if i >= self.size() {
            return Err(KMeansError::IndexOutOfRange {
                index: i,
                size: self.size(),
            });
        }
        Ok(self.points.row(i))
    }

    /// Live read-only view of all points, one per row.
    pub fn contents(&self) -> ArrayView2<'_, f64> {
        self.points.view()
    }

    /// Live mutable view of all points.
    ///
    /// Coordinates can be edited in place, but the shape is fixed: points are
    /// only ever added through [`PointSet::append`]. Edits are not validated.
    pub fn contents_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.points.view_mut()
    }

    /// Adds `point` to the end of the set.
    ///
    /// # Errors
    ///
    /// Returns an error if the point's length differs from `dimension()` or it
    /// holds a non-finite coordinate.
    pub fn append(&mut self, point: &[f64]) -> Result<(), KMeansError> {
        let point = ArrayView1::from(point);
        self.check_point(&point)?;
        self.push_unchecked(point)
    }

    fn check_point(&self, point: &ArrayView1<f64>) -> Result<(), KMeansError> {
        if point.len() != self.dimension {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} coordinates, got {}",
                self.dimension,
                point.len()
            )));
        }
        if let Some(value) = point.iter().find(|v| !v.is_finite()) {
            return Err(KMeansError::InvalidPoint(format!(
                "non-finite coordinate {}",
                value
            )));
        }
        Ok(())
    }

    fn push_unchecked(&mut self, point: ArrayView1<f64>) -> Result<(), KMeansError> {
        self.points
            .push(Axis(0), point)
            .map_err(|e| KMeansError::InvalidDimensions(e.to_string()))
    }
}
