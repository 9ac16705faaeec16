//! Static task file records: partfields, their polygons and guidance patterns.

use serde::Deserialize;

/// Contents of the task file relevant to feature access.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskFile {
    pub partfields: Vec<Partfield>,
}

impl TaskFile {
    /// Iterate every guidance pattern of every partfield, in document order.
    pub fn guidance_patterns(&self) -> impl Iterator<Item = &GuidancePattern> {
        self.partfields
            .iter()
            .flat_map(|partfield| &partfield.guidance_patterns)
    }
}

/// A field or part of a field (ISO 11783-10 `PFD`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Partfield {
    pub id: String,
    pub code: Option<String>,
    pub designator: String,
    /// Area in square metres.
    pub area: i64,
    pub customer_id_ref: Option<String>,
    pub farm_id_ref: Option<String>,
    pub crop_type_id_ref: Option<String>,
    pub crop_variety_id_ref: Option<String>,
    pub field_id_ref: Option<String>,
    pub polygons: Vec<Polygon>,
    pub guidance_patterns: Vec<GuidancePattern>,
}

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Polygon type (ISO 11783-10 `PLN` attribute A).
///
/// Deserialized from its numeric code.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u8")]
pub enum PolygonType {
    #[default]
    PartfieldBoundary = 1,
    TreatmentZone = 2,
    WaterSurface = 3,
    Building = 4,
    Road = 5,
    Obstacle = 6,
    Flag = 7,
    Other = 8,
    Mainfield = 9,
    Headland = 10,
    BufferZone = 11,
    Windbreak = 12,
}

impl PolygonType {
    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::PartfieldBoundary),
            2 => Some(Self::TreatmentZone),
            3 => Some(Self::WaterSurface),
            4 => Some(Self::Building),
            5 => Some(Self::Road),
            6 => Some(Self::Obstacle),
            7 => Some(Self::Flag),
            8 => Some(Self::Other),
            9 => Some(Self::Mainfield),
            10 => Some(Self::Headland),
            11 => Some(Self::BufferZone),
            12 => Some(Self::Windbreak),
            _ => None,
        }
    }
}

impl TryFrom<u8> for PolygonType {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_u8(v).ok_or_else(|| format!("unknown polygon type {v}"))
    }
}

/// A polygon with one exterior ring and any number of holes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Polygon {
    pub polygon_type: PolygonType,
    pub exterior: Vec<Point>,
    pub interiors: Vec<Vec<Point>>,
}

impl Polygon {
    pub const fn is_treatment_zone(&self) -> bool {
        matches!(self.polygon_type, PolygonType::TreatmentZone)
    }
}

/// Guidance pattern type (ISO 11783-10 `GPN` attribute C).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u8")]
pub enum GuidancePatternType {
    #[default]
    AB = 1,
    APlus = 2,
    Curve = 3,
    Pivot = 4,
    Spiral = 5,
}

impl GuidancePatternType {
    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::AB),
            2 => Some(Self::APlus),
            3 => Some(Self::Curve),
            4 => Some(Self::Pivot),
            5 => Some(Self::Spiral),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AB => "AB",
            Self::APlus => "APlus",
            Self::Curve => "Curve",
            Self::Pivot => "Pivot",
            Self::Spiral => "Spiral",
        }
    }
}

impl TryFrom<u8> for GuidancePatternType {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_u8(v).ok_or_else(|| format!("unknown guidance pattern type {v}"))
    }
}

/// A steering line used for machine guidance (ISO 11783-10 `GPN`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GuidancePattern {
    pub id: String,
    pub designator: Option<String>,
    pub pattern_type: GuidancePatternType,
    pub points: Vec<Point>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_type_roundtrip() {
        for i in 1..=12 {
            let pt = PolygonType::from_u8(i).unwrap();
            assert_eq!(pt as u8, i);
        }
        assert!(PolygonType::from_u8(0).is_none());
        assert!(PolygonType::from_u8(13).is_none());
    }

    #[test]
    fn guidance_pattern_type_names() {
        assert_eq!(GuidancePatternType::AB.as_str(), "AB");
        assert_eq!(GuidancePatternType::from_u8(4), Some(GuidancePatternType::Pivot));
        assert!(GuidancePatternType::from_u8(6).is_none());
    }

    #[test]
    fn type_codes_deserialize_numerically() {
        let pattern: GuidancePattern =
            serde_json::from_str(r#"{"id": "GPN1", "pattern_type": 3}"#).unwrap();
        assert_eq!(pattern.pattern_type, GuidancePatternType::Curve);

        let polygon: Polygon = serde_json::from_str(r#"{"polygon_type": 11}"#).unwrap();
        assert_eq!(polygon.polygon_type, PolygonType::BufferZone);

        assert!(serde_json::from_str::<GuidancePattern>(r#"{"pattern_type": 0}"#).is_err());
        assert!(serde_json::from_str::<Polygon>(r#"{"polygon_type": "TreatmentZone"}"#).is_err());
    }

    #[test]
    fn guidance_patterns_span_partfields() {
        let task = TaskFile {
            partfields: vec![
                Partfield {
                    guidance_patterns: vec![GuidancePattern {
                        id: "GPN1".to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
                Partfield::default(),
                Partfield {
                    guidance_patterns: vec![GuidancePattern {
                        id: "GPN2".to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            ],
        };

        let ids: Vec<_> = task.guidance_patterns().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["GPN1", "GPN2"]);
    }
}
