//! WKB encoding.
//!
//! Each geometry type comes as a pair: `*_wkb_size` returns the exact number of bytes that the
//! matching `write_*_as_wkb` appends. Output is always little-endian with a header in front of
//! every geometry, nested members included.

mod geometry;
mod geometrycollection;
mod linestring;
mod point;
mod polygon;

pub use geometry::{geometry_wkb_size, write_geometry_as_wkb};
pub use geometrycollection::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
pub use linestring::{
    line_string_wkb_size, multi_line_string_wkb_size, write_line_string_as_wkb,
    write_multi_line_string_as_wkb,
};
pub use point::{
    multi_point_wkb_size, point_wkb_size, write_multi_point_as_wkb, write_point_as_wkb,
    POINT_WKB_SIZE,
};
pub use polygon::{
    multi_polygon_wkb_size, polygon_wkb_size, write_multi_polygon_as_wkb, write_polygon_as_wkb,
};
