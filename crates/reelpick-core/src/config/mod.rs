//! Configuration system for reelpick.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod data_config;
pub mod encoder_config;
pub mod recommend_config;
pub mod reelpick_config;

pub use data_config::DataConfig;
pub use encoder_config::EncoderConfig;
pub use recommend_config::RecommendConfig;
pub use reelpick_config::{CliOverrides, ReelpickConfig};
