use crate::common::{WKBType, COORD_SIZE, COUNT_SIZE, HEADER_SIZE};
use crate::geometry::{LinearRing, MultiPolygon, Polygon};
use crate::header::write_header;
use crate::primitive::write_count;
use crate::writer::point::write_coords;

/// The byte length of a ring, which has no header
fn linear_ring_wkb_size(ring: &LinearRing) -> usize {
    COUNT_SIZE + ring.len() * COORD_SIZE
}

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    let mut sum = HEADER_SIZE + COUNT_SIZE;
    for ring in geom {
        sum += linear_ring_wkb_size(ring);
    }
    sum
}

/// Write a Polygon geometry encoded as WKB
pub fn write_polygon_as_wkb(buf: &mut Vec<u8>, geom: &Polygon) {
    write_header(buf, WKBType::Polygon);
    write_count(buf, geom.len());
    for ring in geom {
        write_coords(buf, ring.as_slice());
    }
}

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    let mut sum = HEADER_SIZE + COUNT_SIZE;
    for polygon in geom {
        sum += polygon_wkb_size(polygon);
    }
    sum
}

/// Write a MultiPolygon geometry encoded as WKB
pub fn write_multi_polygon_as_wkb(buf: &mut Vec<u8>, geom: &MultiPolygon) {
    write_header(buf, WKBType::MultiPolygon);
    write_count(buf, geom.len());
    for polygon in geom {
        write_polygon_as_wkb(buf, polygon);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rings_have_no_header() {
        let geom = Polygon::new(vec![
            LinearRing::from_coords([(0., 0.), (1., 0.), (0., 1.), (0., 0.)]),
            LinearRing::default(),
        ]);
        let mut buf = vec![];
        write_polygon_as_wkb(&mut buf, &geom);
        assert_eq!(buf.len(), polygon_wkb_size(&geom));
        assert_eq!(buf.len(), 9 + (4 + 4 * 16) + 4);
        // ring count, then the first ring's point count
        assert_eq!(&buf[5..13], &[2, 0, 0, 0, 4, 0, 0, 0]);
    }
}
