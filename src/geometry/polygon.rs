use crate::geometry::Point;

/// A polygon ring.
///
/// Only meaningful as part of a [`Polygon`]. On the wire a ring has no header of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing(pub Vec<Point>);

impl_sequence!(LinearRing, Point);

impl LinearRing {
    pub fn from_coords<P: Into<Point>>(coords: impl IntoIterator<Item = P>) -> Self {
        coords.into_iter().map(Into::into).collect()
    }
}

/// An ordered sequence of rings.
///
/// By convention the first ring is the exterior and the rest are holes, but that is not
/// enforced: rings are kept exactly in the order given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon(pub Vec<LinearRing>);

impl_sequence!(Polygon, LinearRing);

impl Polygon {
    /// The first ring, if any
    pub fn exterior(&self) -> Option<&LinearRing> {
        self.0.first()
    }

    /// Every ring after the first
    pub fn interiors(&self) -> &[LinearRing] {
        self.0.get(1..).unwrap_or_default()
    }
}
