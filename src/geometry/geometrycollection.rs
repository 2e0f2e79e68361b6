use crate::geometry::Geometry;

/// An ordered sequence of geometries of any type, other collections included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl_sequence!(GeometryCollection, Geometry);

impl GeometryCollection {
    /// How many collections deep this value nests, counting itself
    pub fn depth(&self) -> usize {
        1 + self
            .iter()
            .filter_map(Geometry::as_geometry_collection)
            .map(GeometryCollection::depth)
            .max()
            .unwrap_or(0)
    }
}
