use crate::error::{WKBError, WKBResult};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, WKBGeometryType,
};
use crate::header::read_header_as;
use crate::options::WKBReadOptions;
use crate::reader::{read_geometry as read_geometry_in_context, ReadContext, ReadWKBBody};
use crate::writer::{
    geometry_collection_wkb_size, geometry_wkb_size, line_string_wkb_size,
    multi_line_string_wkb_size, multi_point_wkb_size, multi_polygon_wkb_size, point_wkb_size,
    polygon_wkb_size, write_geometry_as_wkb, write_geometry_collection_as_wkb,
    write_line_string_as_wkb, write_multi_line_string_as_wkb, write_multi_point_as_wkb,
    write_multi_polygon_as_wkb, write_point_as_wkb, write_polygon_as_wkb,
};

/// Types that can be decoded from a WKB buffer.
///
/// [`Geometry`] accepts any geometry type. The concrete types only accept a buffer whose
/// top-level header carries their own type code, and fail with
/// [`WKBError::UnsupportedValue`] otherwise.
pub trait FromWKB: Sized {
    /// Decode with explicit [`WKBReadOptions`].
    fn from_wkb_with_options(buf: &[u8], options: &WKBReadOptions) -> WKBResult<Self>;

    /// Decode with the default [`WKBReadOptions`].
    ///
    /// The defaults reject GeometryCollections nested more than 256 deep, so deeper values
    /// only round trip through [`FromWKB::from_wkb_with_options`] with a larger
    /// [`WKBReadOptions::max_nesting_depth`].
    ///
    /// ```
    /// use spatialite_wkb::{FromWKB, Point};
    ///
    /// let buf = [
    ///     0x01, 0x01, 0x00, 0x00, 0x00, // little-endian Point
    ///     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x40, // x = 4.0
    ///     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x24, 0x40, // y = 10.0
    /// ];
    /// assert_eq!(Point::from_wkb(&buf).unwrap(), Point::new(4.0, 10.0));
    /// ```
    fn from_wkb(buf: &[u8]) -> WKBResult<Self> {
        Self::from_wkb_with_options(buf, &WKBReadOptions::default())
    }
}

/// Types that can be encoded as WKB.
pub trait ToWKB {
    /// The exact number of bytes [`ToWKB::write_wkb`] appends.
    fn wkb_size(&self) -> usize;

    /// Append the little-endian WKB encoding of `self` to `buf`.
    fn write_wkb(&self, buf: &mut Vec<u8>);

    /// Encode into a new buffer of exactly [`ToWKB::wkb_size`] bytes.
    fn to_wkb(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.wkb_size());
        self.write_wkb(&mut buf);
        log::trace!("encoded {} bytes of WKB", buf.len());
        buf
    }
}

/// Read one geometry from the front of `buf`, advancing it past the bytes consumed.
///
/// On error `buf` is left untouched.
pub fn read_geometry(buf: &mut &[u8]) -> WKBResult<Geometry> {
    read_geometry_with_options(buf, &WKBReadOptions::default())
}

/// [`read_geometry`] with explicit [`WKBReadOptions`].
///
/// `allow_trailing_bytes` does not apply here, since the remainder is handed back.
pub fn read_geometry_with_options(
    buf: &mut &[u8],
    options: &WKBReadOptions,
) -> WKBResult<Geometry> {
    let mut rest = *buf;
    let geom = read_geometry_in_context(&mut rest, ReadContext::new(options))?;
    *buf = rest;
    Ok(geom)
}

/// Decode a complete WKB buffer into a [`Geometry`] of any type.
pub fn from_wkb(buf: &[u8]) -> WKBResult<Geometry> {
    Geometry::from_wkb(buf)
}

/// Encode any geometry as little-endian WKB.
pub fn to_wkb(geom: &impl ToWKB) -> Vec<u8> {
    geom.to_wkb()
}

fn check_trailing_bytes(rest: &[u8], options: &WKBReadOptions) -> WKBResult<()> {
    if !rest.is_empty() && !options.allow_trailing_bytes {
        log::debug!("{} bytes left after WKB geometry", rest.len());
        return Err(WKBError::InvalidStorage(
            format!("{} unexpected bytes after geometry", rest.len()).into(),
        ));
    }
    Ok(())
}

impl FromWKB for Geometry {
    fn from_wkb_with_options(buf: &[u8], options: &WKBReadOptions) -> WKBResult<Self> {
        let mut rest = buf;
        let geom = read_geometry_in_context(&mut rest, ReadContext::new(options))?;
        check_trailing_bytes(rest, options)?;
        log::trace!("decoded {:?} from {} bytes", geom.wkb_type(), buf.len());
        Ok(geom)
    }
}

impl ToWKB for Geometry {
    fn wkb_size(&self) -> usize {
        geometry_wkb_size(self)
    }

    fn write_wkb(&self, buf: &mut Vec<u8>) {
        write_geometry_as_wkb(buf, self)
    }
}

macro_rules! impl_wkb_codec {
    ($type:ident, $size_fn:ident, $write_fn:ident) => {
        impl FromWKB for $type {
            fn from_wkb_with_options(buf: &[u8], options: &WKBReadOptions) -> WKBResult<Self> {
                let mut rest = buf;
                let byte_order = read_header_as(&mut rest, Self::WKB_TYPE)?;
                let geom = Self::read_body(&mut rest, byte_order, ReadContext::new(options))?;
                check_trailing_bytes(rest, options)?;
                log::trace!("decoded {:?} from {} bytes", Self::WKB_TYPE, buf.len());
                Ok(geom)
            }
        }

        impl ToWKB for $type {
            fn wkb_size(&self) -> usize {
                $size_fn(self)
            }

            fn write_wkb(&self, buf: &mut Vec<u8>) {
                $write_fn(buf, self)
            }
        }
    };
}

impl_wkb_codec!(Point, point_wkb_size, write_point_as_wkb);
impl_wkb_codec!(LineString, line_string_wkb_size, write_line_string_as_wkb);
impl_wkb_codec!(Polygon, polygon_wkb_size, write_polygon_as_wkb);
impl_wkb_codec!(MultiPoint, multi_point_wkb_size, write_multi_point_as_wkb);
impl_wkb_codec!(
    MultiLineString,
    multi_line_string_wkb_size,
    write_multi_line_string_as_wkb
);
impl_wkb_codec!(
    MultiPolygon,
    multi_polygon_wkb_size,
    write_multi_polygon_as_wkb
);
impl_wkb_codec!(
    GeometryCollection,
    geometry_collection_wkb_size,
    write_geometry_collection_as_wkb
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::common::WKBType;
    use crate::test::{hex, point_be, point_le};

    #[test]
    fn read_geometry_leaves_remainder() {
        let mut wkb = point_le();
        wkb.extend_from_slice(&[0xaa, 0xbb]);
        let mut buf = wkb.as_slice();
        let geom = read_geometry(&mut buf).unwrap();
        assert_eq!(geom, Geometry::Point(Point::new(4., 10.)));
        assert_eq!(buf, &[0xaa, 0xbb]);
    }

    #[test]
    fn read_geometry_untouched_on_error() {
        let wkb = point_le();
        let mut buf = &wkb[..wkb.len() - 1];
        assert!(read_geometry(&mut buf).unwrap_err().is_invalid_storage());
        assert_eq!(buf.len(), wkb.len() - 1);
    }

    #[test]
    fn trailing_bytes() {
        let mut wkb = point_le();
        wkb.push(0x00);
        assert!(Point::from_wkb(&wkb).is_ok());
        assert!(Geometry::from_wkb(&wkb).is_ok());

        let strict = WKBReadOptions {
            allow_trailing_bytes: false,
            ..Default::default()
        };
        assert!(Point::from_wkb_with_options(&wkb, &strict)
            .unwrap_err()
            .is_invalid_storage());
        assert!(Geometry::from_wkb_with_options(&wkb, &strict)
            .unwrap_err()
            .is_invalid_storage());
        assert!(Point::from_wkb_with_options(&point_le(), &strict).is_ok());
    }

    #[test]
    fn typed_decode_checks_header() {
        let err = LineString::from_wkb(&point_le()).unwrap_err();
        assert!(err.is_unsupported_value());

        let err = GeometryCollection::from_wkb(&hex("010100000000000000000000000000000000000000"))
            .unwrap_err();
        assert!(err.is_unsupported_value());
    }

    #[test]
    fn byte_orders_agree() {
        assert_eq!(
            Point::from_wkb(&point_be()).unwrap(),
            Point::from_wkb(&point_le()).unwrap()
        );
        // Re-encoding normalizes to little-endian
        assert_eq!(Point::from_wkb(&point_be()).unwrap().to_wkb(), point_le());
    }

    #[test]
    fn to_wkb_allocates_exactly() {
        let geom = Geometry::from(MultiPoint::from_coords([(1., 2.), (3., 4.)]));
        let buf = to_wkb(&geom);
        assert_eq!(buf.len(), geom.wkb_size());
        assert_eq!(from_wkb(&buf).unwrap().wkb_type(), WKBType::MultiPoint);
    }
}
