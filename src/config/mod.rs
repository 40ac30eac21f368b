/// Config Module - Data-Oriented Programming (DOP) style
///
/// - config_data.rs: serde-backed configuration structs with defaults
/// - config_operations.rs: TOML loading and validation

pub mod config_data;
pub mod config_operations;

pub use config_data::{
    ColorConfig, GlyphConfig, MorphConfig, SolverConfig, SpriteConfig, TimingConfig,
    TorusConfig, TuningConfig, ViewportConfig,
};

pub use config_operations::{
    load_config_from_path, load_config_from_str, validate_config, viewport_center,
};
