use crate::geometry::Point;

/// An ordered sequence of points.
///
/// May be empty and is never implicitly closed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Point>);

impl_sequence!(LineString, Point);

impl LineString {
    /// Build from anything convertible to points, e.g. `(f64, f64)` tuples
    pub fn from_coords<P: Into<Point>>(coords: impl IntoIterator<Item = P>) -> Self {
        coords.into_iter().map(Into::into).collect()
    }
}
