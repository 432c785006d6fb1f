pub mod system;

pub use system::{BodyConfig, CometConfig, SlotConfig, SystemConfig};
