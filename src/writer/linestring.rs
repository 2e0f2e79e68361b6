use crate::common::{WKBType, COORD_SIZE, COUNT_SIZE, HEADER_SIZE};
use crate::geometry::{LineString, MultiLineString};
use crate::header::write_header;
use crate::primitive::write_count;
use crate::writer::point::write_coords;

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_SIZE + COUNT_SIZE + geom.len() * COORD_SIZE
}

/// Write a LineString geometry encoded as WKB
pub fn write_line_string_as_wkb(buf: &mut Vec<u8>, geom: &LineString) {
    write_header(buf, WKBType::LineString);
    write_coords(buf, geom.as_slice());
}

/// The byte length of a WKBMultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    let mut sum = HEADER_SIZE + COUNT_SIZE;
    for line_string in geom {
        sum += line_string_wkb_size(line_string);
    }
    sum
}

/// Write a MultiLineString geometry encoded as WKB
pub fn write_multi_line_string_as_wkb(buf: &mut Vec<u8>, geom: &MultiLineString) {
    write_header(buf, WKBType::MultiLineString);
    write_count(buf, geom.len());
    for line_string in geom {
        write_line_string_as_wkb(buf, line_string);
    }
}
