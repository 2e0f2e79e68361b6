use crate::common::{Endianness, WKBType, COORD_SIZE};
use crate::error::WKBResult;
use crate::geometry::{MultiPoint, Point};
use crate::header::read_header_as;
use crate::primitive::{ensure_items, ensure_remaining, read_count, read_f64};
use crate::reader::{ReadContext, ReadWKBBody};

/// Read a bare XY coordinate.
pub(crate) fn read_coord(buf: &mut &[u8], byte_order: Endianness) -> WKBResult<Point> {
    ensure_remaining(buf, COORD_SIZE, "point")?;
    let x = read_f64(buf, byte_order)?;
    let y = read_f64(buf, byte_order)?;
    Ok(Point::new(x, y))
}

/// Read a count followed by that many bare coordinates.
///
/// This is the body of a LineString and also a polygon ring.
pub(crate) fn read_coords(buf: &mut &[u8], byte_order: Endianness) -> WKBResult<Vec<Point>> {
    let num_points = read_count(buf, byte_order)?;
    ensure_items(buf, num_points, COORD_SIZE, "points")?;

    let mut points = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        points.push(read_coord(buf, byte_order)?);
    }
    Ok(points)
}

impl ReadWKBBody for Point {
    fn read_body(buf: &mut &[u8], byte_order: Endianness, _ctx: ReadContext) -> WKBResult<Self> {
        read_coord(buf, byte_order)
    }
}

impl ReadWKBBody for MultiPoint {
    fn read_body(buf: &mut &[u8], byte_order: Endianness, _ctx: ReadContext) -> WKBResult<Self> {
        let num_points = read_count(buf, byte_order)?;
        ensure_items(buf, num_points, WKBType::Point.min_wkb_size(), "points")?;

        let mut points = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            let point_byte_order = read_header_as(buf, WKBType::Point)?;
            points.push(read_coord(buf, point_byte_order)?);
        }
        Ok(MultiPoint(points))
    }
}
