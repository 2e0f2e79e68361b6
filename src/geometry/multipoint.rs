use crate::geometry::Point;

/// An ordered sequence of points, each written as a complete WKB Point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(pub Vec<Point>);

impl_sequence!(MultiPoint, Point);

impl MultiPoint {
    pub fn from_coords<P: Into<Point>>(coords: impl IntoIterator<Item = P>) -> Self {
        coords.into_iter().map(Into::into).collect()
    }
}
