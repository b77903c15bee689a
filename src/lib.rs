pub mod atmosphere;
pub mod config;
pub mod io;
pub mod layers;
pub mod profile;
pub mod types;
pub mod units;

pub use atmosphere::AtmosphereModel;
pub use config::{ConfigError, ModelConfig};
pub use layers::{Boundary, LayerSpec, TempRule, STANDARD_LAYERS};
pub use profile::{sample_profile, ProfileError};
pub use types::{Atmo, GasProperties, SeaLevel};
