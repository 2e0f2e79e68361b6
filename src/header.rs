//! The 5-byte tag in front of every geometry: a byte order marker and a geometry type code.

use crate::common::{Endianness, WKBType, HEADER_SIZE};
use crate::error::{WKBError, WKBResult};
use crate::primitive::{ensure_remaining, read_u32, write_u32};

/// Read a geometry header of any type.
///
/// Returns the byte order that applies to the rest of this geometry and its type. On success
/// `buf` is advanced past the header.
pub fn read_header(buf: &mut &[u8]) -> WKBResult<(Endianness, WKBType)> {
    ensure_remaining(buf, HEADER_SIZE, "geometry header")?;
    let byte_order = Endianness::from_marker(buf[0])?;
    let mut rest = &buf[1..];
    let code = read_u32(&mut rest, byte_order)?;
    let wkb_type = WKBType::try_from(code).map_err(|err| {
        log::debug!("unknown WKB geometry type code {code}");
        WKBError::from(err)
    })?;
    *buf = rest;
    Ok((byte_order, wkb_type))
}

/// Read a geometry header that must be of type `expected`.
pub fn read_header_as(buf: &mut &[u8], expected: WKBType) -> WKBResult<Endianness> {
    let mut rest = *buf;
    let (byte_order, wkb_type) = read_header(&mut rest)?;
    if wkb_type != expected {
        log::debug!("expected WKB {expected:?}, found {wkb_type:?}");
        return Err(WKBError::UnsupportedValue(
            format!("expected {expected:?}, found {wkb_type:?}").into(),
        ));
    }
    *buf = rest;
    Ok(byte_order)
}

/// Append a little-endian header for `wkb_type`.
pub fn write_header(buf: &mut Vec<u8>, wkb_type: WKBType) {
    buf.push(Endianness::LittleEndian.into());
    write_u32(buf, wkb_type.into());
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_header() {
        let mut buf: &[u8] = &[0x01, 0x01, 0x00, 0x00, 0x00];
        let byte_order = read_header_as(&mut buf, WKBType::Point).unwrap();
        assert_eq!(byte_order, Endianness::LittleEndian);
        assert!(buf.is_empty());
    }

    #[test]
    fn big_endian_header() {
        let mut buf: &[u8] = &[0x00, 0x00, 0x00, 0x00, 0x03, 0xaa];
        let (byte_order, wkb_type) = read_header(&mut buf).unwrap();
        assert_eq!(byte_order, Endianness::BigEndian);
        assert_eq!(wkb_type, WKBType::Polygon);
        assert_eq!(buf, &[0xaa]);
    }

    #[test]
    fn bad_byte_order() {
        let mut buf: &[u8] = &[0x02, 0x01, 0x00, 0x00, 0x00];
        let err = read_header_as(&mut buf, WKBType::Point).unwrap_err();
        assert!(err.is_unsupported_value());
    }

    #[test]
    fn type_mismatch() {
        let mut buf: &[u8] = &[0x01, 0x02, 0x00, 0x00, 0x00];
        let err = read_header_as(&mut buf, WKBType::Point).unwrap_err();
        assert!(err.is_unsupported_value());
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn unknown_type_codes() {
        for code in [0u8, 8, 0xff] {
            let mut buf: &[u8] = &[0x01, code, 0x00, 0x00, 0x00];
            assert!(read_header(&mut buf).unwrap_err().is_unsupported_value());
        }
    }

    #[test]
    fn short_header() {
        for len in 0..HEADER_SIZE {
            let full = [0x01, 0x01, 0x00, 0x00, 0x00];
            let mut buf = &full[..len];
            assert!(read_header(&mut buf).unwrap_err().is_invalid_storage());
        }
    }

    #[test]
    fn write_is_little_endian() {
        let mut out = vec![];
        write_header(&mut out, WKBType::GeometryCollection);
        assert_eq!(out, vec![0x01, 0x07, 0x00, 0x00, 0x00]);
    }
}
