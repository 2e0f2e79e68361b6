use crate::geometry::Geometry;
use crate::writer::{
    geometry_collection_wkb_size, line_string_wkb_size, multi_line_string_wkb_size,
    multi_point_wkb_size, multi_polygon_wkb_size, polygon_wkb_size,
    write_geometry_collection_as_wkb, write_line_string_as_wkb, write_multi_line_string_as_wkb,
    write_multi_point_as_wkb, write_multi_polygon_as_wkb, write_point_as_wkb,
    write_polygon_as_wkb, POINT_WKB_SIZE,
};

/// The byte length of a Geometry
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    use Geometry::*;
    match geom {
        Point(_) => POINT_WKB_SIZE,
        LineString(ls) => line_string_wkb_size(ls),
        Polygon(p) => polygon_wkb_size(p),
        MultiPoint(mp) => multi_point_wkb_size(mp),
        MultiLineString(ml) => multi_line_string_wkb_size(ml),
        MultiPolygon(mp) => multi_polygon_wkb_size(mp),
        GeometryCollection(gc) => geometry_collection_wkb_size(gc),
    }
}

/// Write a Geometry encoded as WKB
pub fn write_geometry_as_wkb(buf: &mut Vec<u8>, geom: &Geometry) {
    use Geometry::*;
    match geom {
        Point(p) => write_point_as_wkb(buf, p),
        LineString(ls) => write_line_string_as_wkb(buf, ls),
        Polygon(p) => write_polygon_as_wkb(buf, p),
        MultiPoint(mp) => write_multi_point_as_wkb(buf, mp),
        MultiLineString(ml) => write_multi_line_string_as_wkb(buf, ml),
        MultiPolygon(mp) => write_multi_polygon_as_wkb(buf, mp),
        GeometryCollection(gc) => write_geometry_collection_as_wkb(buf, gc),
    }
}
