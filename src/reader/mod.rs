//! Recursive-descent WKB decoding.
//!
//! Every reader takes the buffer as `&mut &[u8]` positioned just after the header of the
//! geometry it decodes, and leaves it positioned just after that geometry. Readers stop at the
//! first error; whatever they consumed up to that point is unspecified.

mod geometry;
mod geometrycollection;
mod linestring;
mod point;
mod polygon;

pub(crate) use geometry::read_geometry;

use crate::common::Endianness;
use crate::error::{WKBError, WKBResult};
use crate::geometry::WKBGeometryType;
use crate::options::WKBReadOptions;

/// State carried down the recursion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReadContext<'a> {
    options: &'a WKBReadOptions,
    /// Number of GeometryCollections we are currently inside
    depth: usize,
}

impl<'a> ReadContext<'a> {
    pub(crate) fn new(options: &'a WKBReadOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// The context for the members of a collection read in this context.
    pub(crate) fn enter_collection(self) -> WKBResult<Self> {
        let depth = self.depth + 1;
        if depth > self.options.max_nesting_depth {
            log::debug!(
                "GeometryCollection nesting exceeds {}",
                self.options.max_nesting_depth
            );
            return Err(WKBError::UnsupportedValue(
                format!(
                    "GeometryCollection nested more than {} deep",
                    self.options.max_nesting_depth
                )
                .into(),
            ));
        }
        Ok(Self { depth, ..self })
    }
}

/// The body of a geometry with a fixed type, i.e. everything after its header.
pub(crate) trait ReadWKBBody: WKBGeometryType + Sized {
    fn read_body(buf: &mut &[u8], byte_order: Endianness, ctx: ReadContext) -> WKBResult<Self>;
}
