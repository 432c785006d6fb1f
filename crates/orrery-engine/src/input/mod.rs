pub mod edge;
pub mod state;

pub use edge::EdgeTrigger;
pub use state::{InputState, Key};
