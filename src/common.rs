use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{WKBError, WKBResult};

/// Size of the byte order marker
pub const BYTE_ORDER_SIZE: usize = 1;

/// Size of the geometry type code
pub const GEOMETRY_TYPE_SIZE: usize = 4;

/// Size of the header in front of every geometry, nested ones included
pub const HEADER_SIZE: usize = BYTE_ORDER_SIZE + GEOMETRY_TYPE_SIZE;

/// Size of a point, line string, ring or geometry count
pub const COUNT_SIZE: usize = 4;

/// Size of a single ordinate
pub const F64_SIZE: usize = 8;

/// Size of an XY coordinate without any header
pub const COORD_SIZE: usize = 2 * F64_SIZE;

/// The geometry types that can appear in a WKB buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl WKBType {
    /// The smallest number of bytes a complete geometry of this type can occupy, header
    /// included.
    ///
    /// Used to reject element counts that cannot possibly fit in the remaining buffer before
    /// anything is allocated.
    pub const fn min_wkb_size(&self) -> usize {
        match self {
            WKBType::Point => HEADER_SIZE + COORD_SIZE,
            _ => HEADER_SIZE + COUNT_SIZE,
        }
    }
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    BigEndian = 0,
    LittleEndian = 1,
}

impl Endianness {
    /// Parse a byte order marker
    pub fn from_marker(marker: u8) -> WKBResult<Self> {
        Self::try_from_primitive(marker).map_err(|err| {
            WKBError::UnsupportedValue(format!("byte order marker {}", err.number).into())
        })
    }
}
