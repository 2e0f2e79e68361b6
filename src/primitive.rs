//! Fixed-width scalars: counts and ordinates.
//!
//! Readers take the buffer as `&mut &[u8]` and advance it past whatever they consume, so the
//! slice left behind is always the unread remainder. Writers always emit little-endian.

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};

use crate::common::{Endianness, COUNT_SIZE, F64_SIZE};
use crate::error::{WKBError, WKBResult};

/// Check that `buf` still holds `needed` bytes.
pub(crate) fn ensure_remaining(buf: &[u8], needed: usize, what: &str) -> WKBResult<()> {
    if buf.len() < needed {
        log::debug!(
            "truncated WKB: {what} needs {needed} bytes, {} remaining",
            buf.len()
        );
        return Err(WKBError::InvalidStorage(
            format!("{what} needs {needed} bytes, {} remaining", buf.len()).into(),
        ));
    }
    Ok(())
}

/// Check that `buf` can hold `count` items of at least `item_size` bytes each.
///
/// Counts come straight from untrusted input, so this runs before any allocation sized by
/// them.
pub(crate) fn ensure_items(
    buf: &[u8],
    count: usize,
    item_size: usize,
    what: &str,
) -> WKBResult<()> {
    match count.checked_mul(item_size) {
        Some(needed) => ensure_remaining(buf, needed, what),
        None => {
            log::debug!("truncated WKB: {count} {what} cannot fit in any buffer");
            Err(WKBError::InvalidStorage(
                format!("{count} {what} cannot fit in {} bytes", buf.len()).into(),
            ))
        }
    }
}

/// Read a `u32` in the given byte order.
pub fn read_u32(buf: &mut &[u8], byte_order: Endianness) -> WKBResult<u32> {
    ensure_remaining(buf, COUNT_SIZE, "u32")?;
    let value = match byte_order {
        Endianness::BigEndian => buf.read_u32::<BigEndian>()?,
        Endianness::LittleEndian => buf.read_u32::<LittleEndian>()?,
    };
    Ok(value)
}

/// Read a point, ring or geometry count.
pub fn read_count(buf: &mut &[u8], byte_order: Endianness) -> WKBResult<usize> {
    Ok(read_u32(buf, byte_order)? as usize)
}

/// Read an `f64` in the given byte order.
///
/// The bits are reinterpreted as-is, so NaN payloads survive.
pub fn read_f64(buf: &mut &[u8], byte_order: Endianness) -> WKBResult<f64> {
    ensure_remaining(buf, F64_SIZE, "f64")?;
    let value = match byte_order {
        Endianness::BigEndian => buf.read_f64::<BigEndian>()?,
        Endianness::LittleEndian => buf.read_f64::<LittleEndian>()?,
    };
    Ok(value)
}

/// Append a little-endian `u32`.
pub fn write_u32(buf: &mut Vec<u8>, value: u32) {
    let mut bytes = [0; COUNT_SIZE];
    LittleEndian::write_u32(&mut bytes, value);
    buf.extend_from_slice(&bytes);
}

/// Append a count.
///
/// # Panics
///
/// If `count` does not fit in a `u32`, which is the widest count WKB can express.
pub fn write_count(buf: &mut Vec<u8>, count: usize) {
    let count = u32::try_from(count).expect("WKB counts are limited to u32::MAX");
    write_u32(buf, count);
}

/// Append a little-endian `f64`.
pub fn write_f64(buf: &mut Vec<u8>, value: f64) {
    let mut bytes = [0; F64_SIZE];
    LittleEndian::write_f64(&mut bytes, value);
    buf.extend_from_slice(&bytes);
}
