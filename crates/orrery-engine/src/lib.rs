pub mod api;
pub mod components;
pub mod config;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::runner::SimRunner;
pub use api::types::{BodyId, SimEvent};
pub use components::body::CelestialBody;
pub use components::comet::{Comet, TrailPoint};
pub use config::system::{BodyConfig, CometConfig, SlotConfig, SystemConfig};
pub use core::scene::Scene;
pub use core::time::{SimClock, TimeControl};
pub use input::{EdgeTrigger, InputState, Key};
pub use renderer::camera::{Camera, CameraUniform};
pub use renderer::instance::{FrameBuffer, RenderInstance, TrailVertex};
pub use systems::layout::{ComparisonSlot, LayoutMode, SceneLayout, Transform};
pub use systems::overlay::InfoPanel;
pub use systems::selection::{BodyInfo, SelectionEntry, Selector};
