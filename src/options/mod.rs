//! Coordinator tunables with TOML preset support.
//!
//! Transition timing, orbit speed, cycling pause, and animation partitioning
//! are consolidated here. Options serialize to/from TOML so hosts can ship
//! presets next to their scenes.

mod animation;
mod camera;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera transition, orbit, and cycling parameters.
    pub camera: CameraOptions,
    /// Scene animation stepping parameters.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, VantageError> {
        toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// Copy with one field replaced, addressed as `section.field` the way
    /// the JSON schema lays them out.
    pub fn with_field(
        &self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<Self, VantageError> {
        let mut root = serde_json::to_value(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        let slot = root
            .get_mut(section)
            .and_then(|s| s.get_mut(field))
            .ok_or_else(|| {
                VantageError::OptionsParse(format!("no option {section}.{field}"))
            })?;
        *slot = value;
        serde_json::from_value(root)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
base_duration_secs = 4.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.base_duration_secs, 4.0);
        assert_eq!(opts.camera.easing, EasingFunction::SineInOut);
        assert_eq!(opts.animation.viewpoint_step_ceiling, 60);
    }

    #[test]
    fn easing_is_configurable() {
        let toml_str = r#"
[camera.easing]
kind = "linear"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.easing, EasingFunction::Linear);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nbase_duration_secs = ").unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));
    }

    #[test]
    fn viewpoint_tag_matches_prefix() {
        let anim = AnimationOptions::default();
        assert!(anim.is_viewpoint_bound("ViewStateAnimation"));
        assert!(anim.is_viewpoint_bound("ViewStateAnimation_2"));
        assert!(!anim.is_viewpoint_bound("DoorSwing"));

        let untagged = AnimationOptions {
            viewpoint_tag: String::new(),
            ..AnimationOptions::default()
        };
        assert!(!untagged.is_viewpoint_bound("ViewStateAnimation"));
    }

    #[test]
    fn durations_convert_from_seconds() {
        let cam = CameraOptions {
            base_duration_secs: 1.5,
            cycle_pause_secs: -1.0,
            ..CameraOptions::default()
        };
        assert_eq!(cam.base_duration().as_millis(), 1500);
        assert!(cam.cycle_pause().is_zero());
        assert!((cam.orbit_step() - 1.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("vantage-options-test");
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.camera.orbit_step_degrees = 2.5;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn bundled_preset_parses() {
        let opts = Options::from_toml(include_str!("../../assets/presets/brisk.toml")).unwrap();
        assert_eq!(opts.camera.base_duration_secs, 1.2);
        assert_eq!(
            opts.camera.easing,
            EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 }
        );
        assert_eq!(opts.animation.viewpoint_step_ceiling, 90);
        assert_eq!(opts.animation.viewpoint_tag, "ViewStateAnimation");
    }

    #[test]
    fn single_field_update() {
        let opts = Options::default()
            .with_field("camera", "cycle_pause_secs", serde_json::json!(0.5))
            .unwrap();
        assert_eq!(opts.camera.cycle_pause_secs, 0.5);
        assert_eq!(opts.animation, AnimationOptions::default());

        let err = Options::default()
            .with_field("camera", "warp_speed", serde_json::json!(9))
            .unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));

        let err = Options::default()
            .with_field("animation", "viewpoint_step_ceiling", serde_json::json!("many"))
            .unwrap_err();
        assert!(matches!(err, VantageError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("animation"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("base_duration_secs").is_some());
        assert!(camera.get("near_fraction").is_none());
        let animation = &props["animation"]["properties"];
        assert!(animation.get("viewpoint_step_ceiling").is_some());
        assert!(animation.get("viewpoint_tag").is_none());
    }
}
