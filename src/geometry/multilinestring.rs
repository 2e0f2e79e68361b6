use crate::geometry::LineString;

/// An ordered sequence of line strings, each written as a complete WKB LineString.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(pub Vec<LineString>);

impl_sequence!(MultiLineString, LineString);
