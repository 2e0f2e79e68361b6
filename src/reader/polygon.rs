use crate::common::{Endianness, WKBType, COUNT_SIZE};
use crate::error::WKBResult;
use crate::geometry::{LinearRing, MultiPolygon, Polygon};
use crate::header::read_header_as;
use crate::primitive::{ensure_items, read_count};
use crate::reader::point::read_coords;
use crate::reader::{ReadContext, ReadWKBBody};

impl ReadWKBBody for Polygon {
    fn read_body(buf: &mut &[u8], byte_order: Endianness, _ctx: ReadContext) -> WKBResult<Self> {
        let num_rings = read_count(buf, byte_order)?;
        // Every ring is at least its point count
        ensure_items(buf, num_rings, COUNT_SIZE, "rings")?;

        let mut rings = Vec::with_capacity(num_rings);
        for _ in 0..num_rings {
            rings.push(LinearRing(read_coords(buf, byte_order)?));
        }
        Ok(Polygon(rings))
    }
}

impl ReadWKBBody for MultiPolygon {
    fn read_body(buf: &mut &[u8], byte_order: Endianness, ctx: ReadContext) -> WKBResult<Self> {
        let num_polygons = read_count(buf, byte_order)?;
        ensure_items(
            buf,
            num_polygons,
            WKBType::Polygon.min_wkb_size(),
            "polygons",
        )?;

        let mut polygons = Vec::with_capacity(num_polygons);
        for _ in 0..num_polygons {
            let polygon_byte_order = read_header_as(buf, WKBType::Polygon)?;
            polygons.push(Polygon::read_body(buf, polygon_byte_order, ctx)?);
        }
        Ok(MultiPolygon(polygons))
    }
}
