//! Conversions to and from [`geo_types`].
//!
//! Going to `geo_types` is lossless except that [`geo_types::Polygon::new`] closes any open
//! ring. Coming from `geo_types`, the shapes without a WKB type of their own are widened:
//! a `Line` becomes a two-point [`LineString`], and `Rect` and `Triangle` become
//! [`Polygon`]s.

use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

impl From<Point> for geo_types::Coord {
    fn from(value: Point) -> Self {
        geo_types::coord! { x: value.x, y: value.y }
    }
}

impl From<Point> for geo_types::Point {
    fn from(value: Point) -> Self {
        geo_types::Point::new(value.x, value.y)
    }
}

impl From<LineString> for geo_types::LineString {
    fn from(value: LineString) -> Self {
        value.into_iter().map(geo_types::Coord::from).collect()
    }
}

impl From<LinearRing> for geo_types::LineString {
    fn from(value: LinearRing) -> Self {
        value.into_iter().map(geo_types::Coord::from).collect()
    }
}

impl From<Polygon> for geo_types::Polygon {
    fn from(value: Polygon) -> Self {
        let mut rings = value.into_iter().map(geo_types::LineString::from);
        let exterior = rings.next().unwrap_or_else(|| geo_types::LineString::new(vec![]));
        geo_types::Polygon::new(exterior, rings.collect())
    }
}

impl From<MultiPoint> for geo_types::MultiPoint {
    fn from(value: MultiPoint) -> Self {
        value.into_iter().map(geo_types::Point::from).collect()
    }
}

impl From<MultiLineString> for geo_types::MultiLineString {
    fn from(value: MultiLineString) -> Self {
        value.into_iter().map(geo_types::LineString::from).collect()
    }
}

impl From<MultiPolygon> for geo_types::MultiPolygon {
    fn from(value: MultiPolygon) -> Self {
        value.into_iter().map(geo_types::Polygon::from).collect()
    }
}

impl From<GeometryCollection> for geo_types::GeometryCollection {
    fn from(value: GeometryCollection) -> Self {
        value.into_iter().map(geo_types::Geometry::from).collect()
    }
}

impl From<Geometry> for geo_types::Geometry {
    fn from(value: Geometry) -> Self {
        match value {
            Geometry::Point(g) => geo_types::Geometry::Point(g.into()),
            Geometry::LineString(g) => geo_types::Geometry::LineString(g.into()),
            Geometry::Polygon(g) => geo_types::Geometry::Polygon(g.into()),
            Geometry::MultiPoint(g) => geo_types::Geometry::MultiPoint(g.into()),
            Geometry::MultiLineString(g) => geo_types::Geometry::MultiLineString(g.into()),
            Geometry::MultiPolygon(g) => geo_types::Geometry::MultiPolygon(g.into()),
            Geometry::GeometryCollection(g) => geo_types::Geometry::GeometryCollection(g.into()),
        }
    }
}

impl From<geo_types::Coord> for Point {
    fn from(value: geo_types::Coord) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<geo_types::Point> for Point {
    fn from(value: geo_types::Point) -> Self {
        Point::new(value.x(), value.y())
    }
}

impl From<geo_types::Line> for LineString {
    fn from(value: geo_types::Line) -> Self {
        LineString::new(vec![value.start.into(), value.end.into()])
    }
}

impl From<geo_types::LineString> for LineString {
    fn from(value: geo_types::LineString) -> Self {
        value.into_iter().map(Point::from).collect()
    }
}

impl From<geo_types::LineString> for LinearRing {
    fn from(value: geo_types::LineString) -> Self {
        value.into_iter().map(Point::from).collect()
    }
}

impl From<geo_types::Polygon> for Polygon {
    fn from(value: geo_types::Polygon) -> Self {
        let (exterior, interiors) = value.into_inner();
        std::iter::once(exterior)
            .chain(interiors)
            .map(LinearRing::from)
            .collect()
    }
}

impl From<geo_types::Rect> for Polygon {
    fn from(value: geo_types::Rect) -> Self {
        value.to_polygon().into()
    }
}

impl From<geo_types::Triangle> for Polygon {
    fn from(value: geo_types::Triangle) -> Self {
        value.to_polygon().into()
    }
}

impl From<geo_types::MultiPoint> for MultiPoint {
    fn from(value: geo_types::MultiPoint) -> Self {
        value.into_iter().map(Point::from).collect()
    }
}

impl From<geo_types::MultiLineString> for MultiLineString {
    fn from(value: geo_types::MultiLineString) -> Self {
        value.into_iter().map(LineString::from).collect()
    }
}

impl From<geo_types::MultiPolygon> for MultiPolygon {
    fn from(value: geo_types::MultiPolygon) -> Self {
        value.into_iter().map(Polygon::from).collect()
    }
}

impl From<geo_types::GeometryCollection> for GeometryCollection {
    fn from(value: geo_types::GeometryCollection) -> Self {
        value.into_iter().map(Geometry::from).collect()
    }
}

impl From<geo_types::Geometry> for Geometry {
    fn from(value: geo_types::Geometry) -> Self {
        match value {
            geo_types::Geometry::Point(g) => Point::from(g).into(),
            geo_types::Geometry::Line(g) => LineString::from(g).into(),
            geo_types::Geometry::LineString(g) => LineString::from(g).into(),
            geo_types::Geometry::Polygon(g) => Polygon::from(g).into(),
            geo_types::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
            geo_types::Geometry::MultiLineString(g) => MultiLineString::from(g).into(),
            geo_types::Geometry::MultiPolygon(g) => MultiPolygon::from(g).into(),
            geo_types::Geometry::GeometryCollection(g) => GeometryCollection::from(g).into(),
            geo_types::Geometry::Rect(g) => Polygon::from(g).into(),
            geo_types::Geometry::Triangle(g) => Polygon::from(g).into(),
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use geo_types::{coord, line_string, point, polygon, Rect};

    use super::*;
    use crate::api::{FromWKB, ToWKB};
    use crate::test::{geometry_collection, multi_polygon, polygon};

    #[test]
    fn point_to_geo() {
        let geom: geo_types::Point = Point::new(4., 10.).into();
        assert_eq!(geom, point!(x: 4., y: 10.));
        assert_eq!(Point::from(geom), Point::new(4., 10.));
    }

    #[test]
    fn polygon_round_trip() {
        let geom: geo_types::Polygon = polygon().into();
        assert_eq!(geom.exterior().0.len(), 5);
        assert!(geom.interiors().is_empty());
        assert_eq!(Polygon::from(geom), polygon());

        let geom: geo_types::MultiPolygon = multi_polygon().into();
        assert_eq!(MultiPolygon::from(geom), multi_polygon());
    }

    #[test]
    fn polygon_with_hole() {
        let geom = polygon!(
            exterior: [(x: 0., y: 0.), (x: 10., y: 0.), (x: 10., y: 10.), (x: 0., y: 0.)],
            interiors: [[(x: 1., y: 1.), (x: 2., y: 1.), (x: 2., y: 2.), (x: 1., y: 1.)]],
        );
        let converted = Polygon::from(geom);
        assert_eq!(converted.len(), 2);
        assert_eq!(converted.interiors()[0].as_slice()[1], Point::new(2., 1.));
    }

    #[test]
    fn empty_polygon_to_geo() {
        let geom: geo_types::Polygon = Polygon::default().into();
        assert!(geom.exterior().0.is_empty());
    }

    #[test]
    fn open_ring_is_closed_by_geo() {
        let geom = Polygon::new(vec![LinearRing::from_coords([
            (0., 0.),
            (1., 0.),
            (1., 1.),
        ])]);
        let geom: geo_types::Polygon = geom.into();
        assert_eq!(geom.exterior().0.len(), 4);
        assert!(geom.exterior().is_closed());
    }

    #[test]
    fn widened_shapes() {
        let line = geo_types::Line::new(coord! { x: 1., y: 2. }, coord! { x: 3., y: 4. });
        let geom = Geometry::from(geo_types::Geometry::Line(line));
        assert_eq!(
            geom,
            Geometry::LineString(LineString::from_coords([(1., 2.), (3., 4.)]))
        );

        let rect = Rect::new(coord! { x: 0., y: 0. }, coord! { x: 2., y: 1. });
        let geom = Geometry::from(geo_types::Geometry::Rect(rect));
        let exterior = geom.as_polygon().unwrap().exterior().unwrap();
        assert_eq!(exterior.len(), 5);
        assert_eq!(exterior.as_slice().first(), exterior.as_slice().last());
    }

    #[test]
    fn collection_through_wkb() {
        let geom: geo_types::Geometry = Geometry::from(geometry_collection()).into();
        let back = Geometry::from(geom);
        let decoded = Geometry::from_wkb(&back.to_wkb()).unwrap();
        assert_eq!(decoded, Geometry::from(geometry_collection()));
    }

    #[test]
    fn coordinates_survive() {
        let geom = line_string![(x: 0.1, y: 0.2), (x: 1e-300, y: -7.25)];
        let decoded = LineString::from_wkb(&LineString::from(geom.clone()).to_wkb()).unwrap();
        let back: geo_types::LineString = decoded.into();
        for (a, b) in back.coords().zip(geom.coords()) {
            assert_relative_eq!(a.x, b.x);
            assert_relative_eq!(a.y, b.y);
        }
    }
}
