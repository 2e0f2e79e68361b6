use crate::common::{WKBType, COORD_SIZE, COUNT_SIZE, HEADER_SIZE};
use crate::geometry::{MultiPoint, Point};
use crate::header::write_header;
use crate::primitive::{write_count, write_f64};

/// The byte length of a WKBPoint
pub const POINT_WKB_SIZE: usize = HEADER_SIZE + COORD_SIZE;

/// [`POINT_WKB_SIZE`], for symmetry with the other geometry types
pub fn point_wkb_size(_geom: &Point) -> usize {
    POINT_WKB_SIZE
}

/// Append a bare XY coordinate
pub(crate) fn write_coord(buf: &mut Vec<u8>, point: &Point) {
    write_f64(buf, point.x);
    write_f64(buf, point.y);
}

/// Append a count followed by bare coordinates
pub(crate) fn write_coords(buf: &mut Vec<u8>, points: &[Point]) {
    write_count(buf, points.len());
    for point in points {
        write_coord(buf, point);
    }
}

/// Write a Point geometry encoded as WKB
pub fn write_point_as_wkb(buf: &mut Vec<u8>, geom: &Point) {
    write_header(buf, WKBType::Point);
    write_coord(buf, geom);
}

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_SIZE + COUNT_SIZE + geom.len() * POINT_WKB_SIZE
}

/// Write a MultiPoint geometry encoded as WKB
pub fn write_multi_point_as_wkb(buf: &mut Vec<u8>, geom: &MultiPoint) {
    write_header(buf, WKBType::MultiPoint);
    write_count(buf, geom.len());
    for point in geom {
        write_point_as_wkb(buf, point);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn point_bytes() {
        let mut buf = vec![];
        write_point_as_wkb(&mut buf, &Point::new(4., 10.));
        assert_eq!(buf.len(), POINT_WKB_SIZE);
        assert_eq!(
            buf,
            vec![
                0x01, 0x01, 0x00, 0x00, 0x00, //
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x40, //
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x24, 0x40,
            ]
        );
    }

    #[test]
    fn multi_point_members_have_headers() {
        let geom = MultiPoint::from_coords([(1., 2.), (3., 4.)]);
        let mut buf = vec![];
        write_multi_point_as_wkb(&mut buf, &geom);
        assert_eq!(buf.len(), multi_point_wkb_size(&geom));
        assert_eq!(&buf[9..14], &[0x01, 0x01, 0x00, 0x00, 0x00]);
        assert_eq!(&buf[30..35], &[0x01, 0x01, 0x00, 0x00, 0x00]);
    }
}
