use serde::{Deserialize, Serialize};

use crate::systems::selection::BodyInfo;

/// Full description of a solar system scene: bodies, comets, selection
/// order and the hand-authored comparison line. Games build this in code;
/// hosts may also ship it as a JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Bodies in spawn order. Parents must come before their satellites.
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub comets: Vec<CometConfig>,
    /// Body names in the order the selection control cycles through them.
    #[serde(default)]
    pub selection_order: Vec<String>,
    /// Size-comparison line: body name → fixed position.
    #[serde(default)]
    pub comparison_slots: Vec<SlotConfig>,
    /// Where collapsing bodies converge. Defaults to the first body's
    /// starting position (the star).
    #[serde(default)]
    pub collapse_center: Option<[f32; 3]>,
}

/// Initial parameters for one celestial body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub scale: f32,
    #[serde(default)]
    pub orbit_radius: f32,
    #[serde(default)]
    pub orbit_speed: f32,
    #[serde(default)]
    pub rotation_speed: f32,
    /// Name of the body this one orbits.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub emissive: f32,
    /// Base angle (degrees) used to fan bodies out at startup.
    #[serde(default)]
    pub start_angle: f32,
    /// Fixed starting position for bodies that do not orbit.
    #[serde(default)]
    pub position: Option<[f32; 3]>,
    /// Record shown by the selection info overlay.
    #[serde(default)]
    pub info: Option<BodyInfo>,
}

/// Initial parameters for one comet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CometConfig {
    pub name: String,
    pub scale: f32,
    pub semi_major_axis: f32,
    pub eccentricity: f32,
    #[serde(default)]
    pub rotation_speed: f32,
    /// Starting angle along the ellipse, radians.
    #[serde(default)]
    pub phase: f32,
}

/// One slot of the comparison line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConfig {
    pub body: String,
    pub position: [f32; 3],
}

impl SystemConfig {
    /// Parse a system description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_system() {
        let json = r#"{
            "bodies": [
                { "name": "Sun", "scale": 4.0, "emissive": 3.5, "position": [0.0, 0.0, -20.0] },
                { "name": "Earth", "scale": 0.35, "orbit_radius": 12.0,
                  "orbit_speed": 1.0, "rotation_speed": 20.0,
                  "parent": "Sun", "start_angle": 90.0 }
            ]
        }"#;
        let config = SystemConfig::from_json(json).unwrap();
        assert_eq!(config.bodies.len(), 2);
        assert_eq!(config.bodies[1].parent.as_deref(), Some("Sun"));
        assert!(config.comets.is_empty());
        assert!(config.selection_order.is_empty());
    }

    #[test]
    fn parse_comets_and_slots() {
        let json = r#"{
            "bodies": [ { "name": "Sun", "scale": 4.0 } ],
            "comets": [
                { "name": "Halley", "scale": 0.05, "semi_major_axis": 45.0,
                  "eccentricity": 0.85, "rotation_speed": 10.0 }
            ],
            "comparison_slots": [
                { "body": "Sun", "position": [-15.0, 0.0, -20.0] }
            ],
            "selection_order": ["Sun"]
        }"#;
        let config = SystemConfig::from_json(json).unwrap();
        assert_eq!(config.comets[0].eccentricity, 0.85);
        assert_eq!(config.comets[0].phase, 0.0, "phase defaults to zero");
        assert_eq!(config.comparison_slots[0].position, [-15.0, 0.0, -20.0]);
        assert_eq!(config.selection_order, vec!["Sun"]);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SystemConfig {
            bodies: vec![BodyConfig {
                name: "Mars".into(),
                scale: 0.16,
                orbit_radius: 15.0,
                orbit_speed: 0.8,
                rotation_speed: 18.0,
                parent: Some("Sun".into()),
                emissive: 0.0,
                start_angle: 135.0,
                position: None,
                info: None,
            }],
            comets: Vec::new(),
            selection_order: vec!["Mars".into()],
            comparison_slots: Vec::new(),
            collapse_center: Some([0.0, 0.0, -20.0]),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back = SystemConfig::from_json(&json).unwrap();
        assert_eq!(back.bodies[0].name, "Mars");
        assert_eq!(back.bodies[0].start_angle, 135.0);
        assert_eq!(back.collapse_center, Some([0.0, 0.0, -20.0]));
    }
}
