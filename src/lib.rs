//! Reading and writing OGC Well-Known Binary (WKB) geometries, as stored in SQLite spatial
//! columns.
//!
//! The seven 2D geometry types are modelled as plain owned values in [`geometry`]. Decoding
//! accepts either byte order and checks every declared length against the remaining input
//! before reading or allocating; encoding always produces little-endian output whose length
//! is known up front.
//!
//! Decoding limits GeometryCollection nesting to [`WKBReadOptions::max_nesting_depth`], 256
//! by default. Deeper collections still encode, but decoding them needs a larger limit.
//!
//! ```
//! use spatialite_wkb::{from_wkb, to_wkb, Geometry, LineString, Point};
//!
//! let geom: Geometry = LineString::new(vec![Point::new(0., 0.), Point::new(1., 1.)]).into();
//! let buf = to_wkb(&geom);
//! assert_eq!(buf.len(), 41);
//! assert_eq!(from_wkb(&buf).unwrap(), geom);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use api::{from_wkb, read_geometry, read_geometry_with_options, to_wkb, FromWKB, ToWKB};
pub use common::{Endianness, WKBType};
pub use error::{WKBError, WKBResult};
pub use geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, WKBGeometryType,
};
pub use options::WKBReadOptions;

pub mod api;
pub mod common;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod header;
pub mod options;
pub mod primitive;
mod reader;
#[cfg(feature = "sqlite")]
pub mod sqlite;
#[cfg(test)]
pub(crate) mod test;
pub mod writer;
