//! Config Operations - Pure DOP Functions
//!
//! Parsing, loading and validation of `MorphConfig`.

use super::config_data::MorphConfig;
use crate::error::{EngineInitError, EngineResult, ErrorContext};
use std::path::Path;

/// Parse a TOML document into a config. Missing fields take their defaults.
pub fn load_config_from_str(source: &str) -> EngineResult<MorphConfig> {
    let config: MorphConfig = toml::from_str(source)?;
    validate_config(&config)?;
    Ok(config)
}

/// Read and parse a TOML config file
pub fn load_config_from_path(path: &Path) -> EngineResult<MorphConfig> {
    log::info!("[config_operations::load] Loading config from {}", path.display());
    let source = std::fs::read_to_string(path).with_path(path)?;
    load_config_from_str(&source).map_err(|e| match e {
        EngineInitError::ConfigParse { error, .. } => EngineInitError::ConfigParse {
            context: path.display().to_string(),
            error,
        },
        other => other,
    })
}

fn require_positive(field: &str, value: f32) -> EngineResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineInitError::invalid_config(field, value, "must be positive"))
    }
}

fn require_unit_range(field: &str, range: [f32; 2]) -> EngineResult<()> {
    let [min, max] = range;
    if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
        return Err(EngineInitError::invalid_config(
            field,
            format!("[{}, {}]", min, max),
            "must be an ordered range within [0, 1]",
        ));
    }
    Ok(())
}

/// Validate configuration parameters
pub fn validate_config(config: &MorphConfig) -> EngineResult<()> {
    if config.payload.is_empty() {
        return Err(EngineInitError::invalid_config("payload", "\"\"", "cannot be empty"));
    }

    require_positive("torus.major_radius", config.torus.major_radius)?;
    require_positive("torus.minor_radius", config.torus.minor_radius)?;
    require_positive("torus.target_height", config.torus.target_height)?;
    require_positive("glyph.target_height", config.glyph.target_height)?;
    require_positive("glyph.footprint", config.glyph.footprint)?;
    require_positive("avatar_size", config.avatar_size)?;
    require_positive("viewport.width", config.viewport.width)?;
    require_positive("viewport.height", config.viewport.height)?;

    let sprite = &config.sprite;
    if sprite.cols == 0 || sprite.rows == 0 {
        return Err(EngineInitError::invalid_config(
            "sprite",
            format!("{}x{}", sprite.cols, sprite.rows),
            "grid needs at least one column and one row",
        ));
    }
    require_positive("sprite.cell_size", sprite.cell_size)?;
    let Some(cell_count) = sprite.cols.checked_mul(sprite.rows) else {
        return Err(EngineInitError::invalid_config(
            "sprite",
            format!("{}x{}", sprite.cols, sprite.rows),
            "grid has too many cells",
        ));
    };
    if sprite.num_slots == 0 || sprite.num_slots > cell_count {
        return Err(EngineInitError::invalid_config(
            "sprite.num_slots",
            sprite.num_slots,
            "must be between 1 and cols * rows",
        ));
    }

    require_unit_range("colors.saturation_range", config.colors.saturation_range)?;
    require_unit_range("colors.lightness_range", config.colors.lightness_range)?;

    let tuning = &config.tuning;
    require_positive("tuning.camera_distance", tuning.camera_distance)?;
    if let Some(depth_range) = tuning.depth_range {
        require_positive("tuning.depth_range", depth_range)?;
    }
    if !(0.0..1.0).contains(&tuning.wave_span) {
        return Err(EngineInitError::invalid_config(
            "tuning.wave_span",
            tuning.wave_span,
            "must be in [0, 1)",
        ));
    }
    if tuning.front_fade_end <= tuning.front_fade_start {
        return Err(EngineInitError::invalid_config(
            "tuning.front_fade_end",
            tuning.front_fade_end,
            "must be greater than front_fade_start",
        ));
    }

    let timing = &config.timing;
    require_positive("timing.forward_duration_s", timing.forward_duration_s)?;
    require_positive("timing.backward_duration_s", timing.backward_duration_s)?;
    if let Some(bad) = timing
        .haptic_thresholds
        .iter()
        .find(|t| !(0.0..=1.0).contains(*t))
    {
        return Err(EngineInitError::invalid_config(
            "timing.haptic_thresholds",
            bad,
            "thresholds must lie in [0, 1]",
        ));
    }

    log::info!(
        "[config_operations::validate] payload={} bytes, torus R={} r={}, solver threshold={}",
        config.payload.len(),
        config.torus.major_radius,
        config.torus.minor_radius,
        config.solver.exact_threshold
    );
    Ok(())
}

/// Screen-space center of the viewport
pub fn viewport_center(config: &MorphConfig) -> (f32, f32) {
    (config.viewport.width * 0.5, config.viewport.height * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MorphConfig::default()).is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = load_config_from_str(
            r#"
            payload = "hello"
            avatar_size = 24.0

            [torus]
            major_radius = 80.0

            [solver]
            exact_threshold = 200
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.payload, "hello");
        assert_eq!(config.avatar_size, 24.0);
        assert_eq!(config.torus.major_radius, 80.0);
        assert_eq!(config.torus.minor_radius, MorphConfig::default().torus.minor_radius);
        assert_eq!(config.solver.exact_threshold, 200);
        assert_eq!(config.sprite, MorphConfig::default().sprite);
    }

    #[test]
    fn test_rejects_too_many_slots() {
        let mut config = MorphConfig::default();
        config.sprite.num_slots = config.sprite.cols * config.sprite.rows + 1;
        match validate_config(&config) {
            Err(EngineInitError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "sprite.num_slots")
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_oversized_sprite_grid() {
        let mut config = MorphConfig::default();
        config.sprite.cols = 70_000;
        config.sprite.rows = 70_000;
        match validate_config(&config) {
            Err(EngineInitError::InvalidConfig { field, .. }) => assert_eq!(field, "sprite"),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_inverted_color_range() {
        let mut config = MorphConfig::default();
        config.colors.lightness_range = [0.8, 0.2];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_toml() {
        let result = load_config_from_str("payload = [");
        assert!(matches!(result, Err(EngineInitError::ConfigParse { .. })));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "payload = \"from disk\"").expect("Failed to write config");

        let config = load_config_from_path(file.path()).expect("config should load");
        assert_eq!(config.payload, "from disk");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing.toml");
        match load_config_from_path(&path) {
            Err(EngineInitError::ConfigIo { path: reported, .. }) => {
                assert!(reported.ends_with("missing.toml"))
            }
            other => panic!("expected ConfigIo, got {:?}", other),
        }
    }

    #[test]
    fn test_viewport_center() {
        let config = MorphConfig::default();
        assert_eq!(viewport_center(&config), (200.0, 200.0));
    }
}
