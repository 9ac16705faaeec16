//! Well-Known Binary encoding for feature geometries.
//!
//! Geometries are written as little-endian ISO WKB with `x = longitude` and
//! `y = latitude`, matching the `OGC:CRS84` axis order the schemas declare.

use crate::model::{Point, Polygon, Position};
use crate::FeatureError;

const WKB_LITTLE_ENDIAN: u8 = 1;

const WKB_POINT: u32 = 1;
const WKB_LINESTRING: u32 = 2;
const WKB_POLYGON: u32 = 3;
const WKB_MULTIPOLYGON: u32 = 6;

/// Bytes for the byte-order marker plus geometry type.
const HEADER_LEN: usize = 5;

/// Bytes per coordinate pair.
const COORD_LEN: usize = 16;

/// Encode a single point.
pub fn point(longitude: f64, latitude: f64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + COORD_LEN);
    write_header(&mut buf, WKB_POINT);
    write_coord(&mut buf, longitude, latitude);
    buf
}

/// Encode a model point.
pub fn from_point(p: &Point) -> Vec<u8> {
    point(p.longitude, p.latitude)
}

/// Encode a logged position.
pub fn from_position(p: &Position) -> Vec<u8> {
    point(p.longitude, p.latitude)
}

/// Encode a line string through `points`.
///
/// # Errors
///
/// Returns [`FeatureError::GeometryTooLarge`] if a count does not fit WKB's `u32`.
pub fn line_string(points: &[Point]) -> Result<Vec<u8>, FeatureError> {
    let mut buf = Vec::with_capacity(HEADER_LEN + 4 + points.len() * COORD_LEN);
    write_header(&mut buf, WKB_LINESTRING);
    write_points(&mut buf, points)?;
    Ok(buf)
}

/// Encode polygons as one multipolygon.
///
/// Rings are closed on write if the source ring is open.
///
/// # Errors
///
/// Returns [`FeatureError::GeometryTooLarge`] if a count does not fit WKB's `u32`.
pub fn multi_polygon<'a>(
    polygons: impl IntoIterator<Item = &'a Polygon>,
) -> Result<Vec<u8>, FeatureError> {
    let polygons: Vec<&Polygon> = polygons.into_iter().collect();
    let mut buf = Vec::new();
    write_header(&mut buf, WKB_MULTIPOLYGON);
    write_count(&mut buf, polygons.len())?;
    for polygon in polygons {
        write_header(&mut buf, WKB_POLYGON);
        write_count(&mut buf, 1 + polygon.interiors.len())?;
        write_ring(&mut buf, &polygon.exterior)?;
        for interior in &polygon.interiors {
            write_ring(&mut buf, interior)?;
        }
    }
    Ok(buf)
}

fn write_header(buf: &mut Vec<u8>, geometry_type: u32) {
    buf.push(WKB_LITTLE_ENDIAN);
    buf.extend_from_slice(&geometry_type.to_le_bytes());
}

/// WKB element count, which is a `u32` on the wire.
fn wkb_count(count: usize) -> Result<u32, FeatureError> {
    u32::try_from(count).map_err(|_| FeatureError::GeometryTooLarge { count })
}

fn write_count(buf: &mut Vec<u8>, count: usize) -> Result<(), FeatureError> {
    buf.extend_from_slice(&wkb_count(count)?.to_le_bytes());
    Ok(())
}

fn write_coord(buf: &mut Vec<u8>, x: f64, y: f64) {
    buf.extend_from_slice(&x.to_le_bytes());
    buf.extend_from_slice(&y.to_le_bytes());
}

fn write_points(buf: &mut Vec<u8>, points: &[Point]) -> Result<(), FeatureError> {
    write_count(buf, points.len())?;
    for p in points {
        write_coord(buf, p.longitude, p.latitude);
    }
    Ok(())
}

fn write_ring(buf: &mut Vec<u8>, ring: &[Point]) -> Result<(), FeatureError> {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first != last => {
            write_count(buf, ring.len() + 1)?;
            for p in ring.iter().chain(std::iter::once(first)) {
                write_coord(buf, p.longitude, p.latitude);
            }
            Ok(())
        }
        _ => write_points(buf, ring),
    }
}
