use crate::geometry::Polygon;

/// An ordered sequence of polygons, each written as a complete WKB Polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl_sequence!(MultiPolygon, Polygon);
