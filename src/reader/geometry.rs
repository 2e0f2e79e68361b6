use crate::common::WKBType;
use crate::error::WKBResult;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::header::read_header;
use crate::reader::{ReadContext, ReadWKBBody};

/// Read one complete geometry of any type, header included.
pub(crate) fn read_geometry(buf: &mut &[u8], ctx: ReadContext) -> WKBResult<Geometry> {
    let (byte_order, wkb_type) = read_header(buf)?;
    let geom = match wkb_type {
        WKBType::Point => Point::read_body(buf, byte_order, ctx)?.into(),
        WKBType::LineString => LineString::read_body(buf, byte_order, ctx)?.into(),
        WKBType::Polygon => Polygon::read_body(buf, byte_order, ctx)?.into(),
        WKBType::MultiPoint => MultiPoint::read_body(buf, byte_order, ctx)?.into(),
        WKBType::MultiLineString => MultiLineString::read_body(buf, byte_order, ctx)?.into(),
        WKBType::MultiPolygon => MultiPolygon::read_body(buf, byte_order, ctx)?.into(),
        WKBType::GeometryCollection => {
            GeometryCollection::read_body(buf, byte_order, ctx)?.into()
        }
    };
    Ok(geom)
}
