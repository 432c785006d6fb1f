/// The solar system catalog: body parameters, comet orbits, selection order,
/// info text and the hand-authored size-comparison line.
///
/// Sizes use a scale where Earth ≈ 0.35; orbit radii are spaced for
/// readability, not to scale (real distances would put Neptune far off
/// screen). Orbit speeds are relative to Earth = 1.

use orrery_engine::{BodyConfig, BodyInfo, CometConfig, SlotConfig, SystemConfig};

/// Where the sun sits; also the comet orbit focus and the collapse center.
pub const SUN_POSITION: [f32; 3] = [0.0, 0.0, -20.0];

// ── Comparison line ──────────────────────────────────────────────────
//
// Bodies lined up by physical size, smallest to largest. The order is
// authored, not derived from orbit order: Mars is smaller than Venus and
// Earth, and Neptune is smaller than Uranus.

/// Distance between neighboring slots.
const BASE_SPACING: f32 = 8.0;
/// Extra clearance around the ringed planet.
const SATURN_EXTRA: f32 = 4.0;
/// Distance from the sun slot to the first planet slot.
const START_DISTANCE: f32 = 5.0;
/// Shared depth of the comparison line.
const LINE_Z: f32 = -20.0;

fn body(
    name: &str,
    scale: f32,
    orbit_radius: f32,
    orbit_speed: f32,
    rotation_speed: f32,
    start_angle: f32,
    info: BodyInfo,
) -> BodyConfig {
    BodyConfig {
        name: name.into(),
        scale,
        orbit_radius,
        orbit_speed,
        rotation_speed,
        parent: Some("Sun".into()),
        emissive: 0.0,
        start_angle,
        position: None,
        info: Some(info),
    }
}

fn info(name: &str, description: &str, facts: [&str; 3]) -> BodyInfo {
    BodyInfo {
        name: name.into(),
        description: description.into(),
        facts: facts.iter().map(|f| f.to_string()).collect(),
    }
}

/// Build the full scene description.
pub fn system_config() -> SystemConfig {
    let mut bodies = vec![BodyConfig {
        name: "Sun".into(),
        scale: 4.0,
        orbit_radius: 0.0,
        orbit_speed: 0.0,
        rotation_speed: 15.0,
        parent: None,
        emissive: 3.5,
        start_angle: 0.0,
        position: Some(SUN_POSITION),
        info: Some(info(
            "Sun",
            "Our stellar powerhouse",
            [
                "Temperature: 5,778K surface, 15M K core",
                "Mass: 99.86% of entire solar system",
                "Powers all life through fusion",
            ],
        )),
    }];

    bodies.push(body(
        "Mercury", 0.11, 8.0, 2.0, 35.0, 0.0,
        info(
            "Mercury",
            "Smallest and fastest planet",
            [
                "Orbital period: 88 Earth days",
                "Temp: 427\u{b0}C day, -173\u{b0}C night",
                "No atmosphere or moons",
            ],
        ),
    ));
    bodies.push(body(
        "Venus", 0.28, 10.0, 1.6, -12.0, 45.0,
        info(
            "Venus",
            "Hottest planet with toxic air",
            [
                "Surface temp: 462\u{b0}C (hotter than Mercury)",
                "Atmosphere: 96% CO2, crushing pressure",
                "Rotates backward (retrograde)",
            ],
        ),
    ));
    bodies.push(body(
        "Earth", 0.35, 12.0, 1.0, 20.0, 90.0,
        info(
            "Earth",
            "Our beautiful blue marble",
            [
                "71% surface covered by water",
                "Perfect distance for liquid water",
                "Protected by magnetic field",
            ],
        ),
    ));
    // The moon orbits Earth, so it must come after it in spawn order
    let mut moon = body(
        "Moon", 0.08, 1.2, 4.0, 5.0, 0.0,
        info(
            "Moon",
            "Earth's loyal companion",
            [
                "Always shows same face to Earth",
                "Created Earth's 24-hour day cycle",
                "Made from rock blasted from Earth",
            ],
        ),
    );
    moon.parent = Some("Earth".into());
    bodies.push(moon);

    bodies.push(body(
        "Mars", 0.16, 15.0, 0.8, 18.0, 135.0,
        info(
            "Mars",
            "The Red Planet, our next home",
            [
                "Olympus Mons volcano: 21km high",
                "Has polar ice caps and seasons",
                "Day: 24h 37min (like Earth)",
            ],
        ),
    ));
    bodies.push(body(
        "Jupiter", 3.36, 20.0, 0.5, 30.0, 180.0,
        info(
            "Jupiter",
            "Giant protector with Great Red Spot",
            [
                "Mass: 2.5x all other planets combined",
                "Great Red Spot: storm larger than Earth",
                "Has 95 moons including 4 major ones",
            ],
        ),
    ));
    bodies.push(body(
        "Saturn", 2.82, 36.0, 0.35, 28.0, 225.0,
        info(
            "Saturn",
            "Ringed beauty, less dense than water",
            [
                "Density: 0.69 g/cm\u{b3} (would float!)",
                "Rings made of ice and rock particles",
                "Moon Titan has thick atmosphere",
            ],
        ),
    ));
    bodies.push(body(
        "Uranus", 1.4, 50.0, 0.25, -15.0, 270.0,
        info(
            "Uranus",
            "Tilted ice giant on its side",
            [
                "Rotates on side (98\u{b0} axial tilt)",
                "Made of water, methane & ammonia ice",
                "Has faint rings found in 1977",
            ],
        ),
    ));
    bodies.push(body(
        "Neptune", 1.17, 55.0, 0.2, 18.0, 315.0,
        info(
            "Neptune",
            "Windiest planet with supersonic storms",
            [
                "Wind speeds: up to 2,100 km/h",
                "Takes 165 Earth years to orbit Sun",
                "Blue color from methane gas",
            ],
        ),
    ));

    SystemConfig {
        bodies,
        comets: comets(),
        selection_order: selection_order(),
        comparison_slots: comparison_slots(),
        collapse_center: Some(SUN_POSITION),
    }
}

fn comets() -> Vec<CometConfig> {
    vec![
        CometConfig {
            name: "Halley".into(),
            scale: 0.05,
            semi_major_axis: 45.0,
            eccentricity: 0.85,
            rotation_speed: 10.0,
            phase: 0.0,
        },
        // Second comet starts half an orbit ahead, on the opposite side
        CometConfig {
            name: "Encke".into(),
            scale: 0.05,
            semi_major_axis: 25.0,
            eccentricity: 0.7,
            rotation_speed: 10.0,
            phase: std::f32::consts::PI,
        },
    ]
}

/// The order the selection key cycles through.
fn selection_order() -> Vec<String> {
    [
        "Sun", "Mercury", "Mars", "Venus", "Earth", "Moon", "Neptune", "Uranus", "Saturn",
        "Jupiter",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn comparison_slots() -> Vec<SlotConfig> {
    let slot = |body: &str, x: f32, y: f32| SlotConfig {
        body: body.into(),
        position: [x, y, LINE_Z],
    };
    vec![
        // Sun off to the side so its light reaches the whole line
        slot("Sun", -15.0, 0.0),
        slot("Mercury", START_DISTANCE, 0.0),
        slot("Mars", START_DISTANCE + BASE_SPACING, 0.0),
        slot("Venus", START_DISTANCE + BASE_SPACING * 2.0, 0.0),
        slot("Earth", START_DISTANCE + BASE_SPACING * 3.0, 0.0),
        // The moon sits raised beside its planet rather than on the line
        slot("Moon", START_DISTANCE + BASE_SPACING * 3.3, 2.0),
        slot("Neptune", START_DISTANCE + BASE_SPACING * 4.0, 0.0),
        slot("Uranus", START_DISTANCE + BASE_SPACING * 5.0, 0.0),
        slot("Saturn", START_DISTANCE + BASE_SPACING * 6.0 + SATURN_EXTRA, 0.0),
        slot(
            "Jupiter",
            START_DISTANCE + BASE_SPACING * 7.0 + SATURN_EXTRA * 2.5,
            0.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_complete() {
        let config = system_config();
        assert_eq!(config.bodies.len(), 10);
        assert_eq!(config.comets.len(), 2);
        assert_eq!(config.selection_order.len(), 10);
        assert_eq!(config.comparison_slots.len(), 10);
    }

    #[test]
    fn parents_are_spawned_before_satellites() {
        let config = system_config();
        let mut seen = HashSet::new();
        for body in &config.bodies {
            if let Some(parent) = &body.parent {
                assert!(seen.contains(parent.as_str()), "{} before {}", body.name, parent);
            }
            seen.insert(body.name.clone());
        }
    }

    #[test]
    fn selection_and_slot_names_resolve() {
        let config = system_config();
        let names: HashSet<_> = config.bodies.iter().map(|b| b.name.clone()).collect();
        for name in &config.selection_order {
            assert!(names.contains(name), "unknown selection entry {name}");
        }
        for slot in &config.comparison_slots {
            assert!(names.contains(&slot.body), "unknown slot body {}", slot.body);
        }
    }

    #[test]
    fn comparison_line_orders_planets_by_size() {
        let config = system_config();
        let scale_of = |name: &str| {
            config
                .bodies
                .iter()
                .find(|b| b.name == name)
                .map(|b| b.scale)
                .unwrap()
        };
        // Planets on the line (sun and moon sit off it) must be size-ascending
        let line: Vec<&SlotConfig> = config
            .comparison_slots
            .iter()
            .filter(|s| s.body != "Sun" && s.body != "Moon")
            .collect();
        for pair in line.windows(2) {
            assert!(pair[0].position[0] < pair[1].position[0], "slots must march outward");
            assert!(
                scale_of(&pair[0].body) < scale_of(&pair[1].body),
                "{} must be smaller than {}",
                pair[0].body,
                pair[1].body
            );
        }
    }

    #[test]
    fn every_body_has_info_with_three_facts() {
        let config = system_config();
        for body in &config.bodies {
            let info = body.info.as_ref().expect("catalog body missing info");
            assert_eq!(info.name, body.name);
            assert_eq!(info.facts.len(), 3);
        }
    }

    #[test]
    fn catalog_survives_a_json_round_trip() {
        let config = system_config();
        let json = serde_json::to_string(&config).unwrap();
        let back = SystemConfig::from_json(&json).unwrap();
        assert_eq!(back.bodies.len(), config.bodies.len());
        assert_eq!(back.comets[1].phase, std::f32::consts::PI);
    }
}
