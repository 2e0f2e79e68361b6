//! In-memory geometry values.
//!
//! Every type here is plain owned data: coordinates are XY `f64` pairs, sequences keep their
//! order and nothing is validated beyond what the wire format itself requires. In particular
//! rings are not closed and winding order is not checked.

use enum_as_inner::EnumAsInner;

use crate::common::WKBType;

/// Sequence accessors shared by every geometry that is an ordered list of something.
macro_rules! impl_sequence {
    ($type:ident, $item:ty) => {
        impl $type {
            pub fn new(items: Vec<$item>) -> Self {
                Self(items)
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }

            pub fn as_slice(&self) -> &[$item] {
                &self.0
            }

            pub fn into_inner(self) -> Vec<$item> {
                self.0
            }
        }

        impl From<Vec<$item>> for $type {
            fn from(value: Vec<$item>) -> Self {
                Self(value)
            }
        }

        impl FromIterator<$item> for $type {
            fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $type {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $type {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::{LinearRing, Polygon};

mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

/// A geometry type with a fixed WKB type code.
pub trait WKBGeometryType {
    /// The type code written in this geometry's header
    const WKB_TYPE: WKBType;
}

/// Any of the seven WKB geometry types.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The WKB type code of the contained geometry
    pub fn wkb_type(&self) -> WKBType {
        match self {
            Geometry::Point(_) => Point::WKB_TYPE,
            Geometry::LineString(_) => LineString::WKB_TYPE,
            Geometry::Polygon(_) => Polygon::WKB_TYPE,
            Geometry::MultiPoint(_) => MultiPoint::WKB_TYPE,
            Geometry::MultiLineString(_) => MultiLineString::WKB_TYPE,
            Geometry::MultiPolygon(_) => MultiPolygon::WKB_TYPE,
            Geometry::GeometryCollection(_) => GeometryCollection::WKB_TYPE,
        }
    }
}

macro_rules! impl_geometry_type {
    ($type:ident, $variant:ident) => {
        impl WKBGeometryType for $type {
            const WKB_TYPE: WKBType = WKBType::$variant;
        }

        impl From<$type> for Geometry {
            fn from(value: $type) -> Self {
                Geometry::$variant(value)
            }
        }
    };
}

impl_geometry_type!(Point, Point);
impl_geometry_type!(LineString, LineString);
impl_geometry_type!(Polygon, Polygon);
impl_geometry_type!(MultiPoint, MultiPoint);
impl_geometry_type!(MultiLineString, MultiLineString);
impl_geometry_type!(MultiPolygon, MultiPolygon);
impl_geometry_type!(GeometryCollection, GeometryCollection);
