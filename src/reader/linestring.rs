use crate::common::{Endianness, WKBType};
use crate::error::WKBResult;
use crate::geometry::{LineString, MultiLineString};
use crate::header::read_header_as;
use crate::primitive::{ensure_items, read_count};
use crate::reader::point::read_coords;
use crate::reader::{ReadContext, ReadWKBBody};

impl ReadWKBBody for LineString {
    fn read_body(buf: &mut &[u8], byte_order: Endianness, _ctx: ReadContext) -> WKBResult<Self> {
        Ok(LineString(read_coords(buf, byte_order)?))
    }
}

impl ReadWKBBody for MultiLineString {
    fn read_body(buf: &mut &[u8], byte_order: Endianness, ctx: ReadContext) -> WKBResult<Self> {
        let num_line_strings = read_count(buf, byte_order)?;
        ensure_items(
            buf,
            num_line_strings,
            WKBType::LineString.min_wkb_size(),
            "line strings",
        )?;

        let mut line_strings = Vec::with_capacity(num_line_strings);
        for _ in 0..num_line_strings {
            let line_string_byte_order = read_header_as(buf, WKBType::LineString)?;
            line_strings.push(LineString::read_body(buf, line_string_byte_order, ctx)?);
        }
        Ok(MultiLineString(line_strings))
    }
}
