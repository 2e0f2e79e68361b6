use crate::common::{WKBType, COUNT_SIZE, HEADER_SIZE};
use crate::geometry::GeometryCollection;
use crate::header::write_header;
use crate::primitive::write_count;
use crate::writer::geometry::{geometry_wkb_size, write_geometry_as_wkb};

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    let mut sum = HEADER_SIZE + COUNT_SIZE;
    for inner_geom in geom {
        sum += geometry_wkb_size(inner_geom);
    }
    sum
}

/// Write a GeometryCollection geometry encoded as WKB
pub fn write_geometry_collection_as_wkb(buf: &mut Vec<u8>, geom: &GeometryCollection) {
    write_header(buf, WKBType::GeometryCollection);
    write_count(buf, geom.len());
    for inner_geom in geom {
        write_geometry_as_wkb(buf, inner_geom);
    }
}
