use crate::api::types::BodyId;
use crate::components::body::CelestialBody;

/// Flat body storage. The scene is created once at startup and bodies are
/// never destroyed during a run, so a Vec with linear id lookup is plenty.
///
/// Iteration order is spawn order; layout code relies on parents being
/// spawned before their satellites so orbit centers resolve within one pass.
pub struct Scene {
    bodies: Vec<CelestialBody>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
        }
    }

    /// Add a body to the scene.
    pub fn spawn(&mut self, body: CelestialBody) -> BodyId {
        let id = body.id;
        self.bodies.push(body);
        id
    }

    /// Get a reference to a body by ID.
    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a body by ID.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Find the first body with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Iterate over all bodies in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Iterate over all bodies mutably, in spawn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CelestialBody> {
        self.bodies.iter_mut()
    }

    /// Number of bodies in the scene.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
