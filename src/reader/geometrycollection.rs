use crate::common::{Endianness, COUNT_SIZE, HEADER_SIZE};
use crate::error::WKBResult;
use crate::geometry::GeometryCollection;
use crate::primitive::{ensure_items, read_count};
use crate::reader::{read_geometry, ReadContext, ReadWKBBody};

/// The smallest geometry of any type: the header and count of an empty LineString, Polygon
/// or collection.
const MIN_MEMBER_SIZE: usize = HEADER_SIZE + COUNT_SIZE;

impl ReadWKBBody for GeometryCollection {
    fn read_body(buf: &mut &[u8], byte_order: Endianness, ctx: ReadContext) -> WKBResult<Self> {
        let ctx = ctx.enter_collection()?;
        let num_geometries = read_count(buf, byte_order)?;
        ensure_items(buf, num_geometries, MIN_MEMBER_SIZE, "geometries")?;

        let mut geometries = Vec::with_capacity(num_geometries);
        for _ in 0..num_geometries {
            geometries.push(read_geometry(buf, ctx)?);
        }
        Ok(GeometryCollection(geometries))
    }
}
