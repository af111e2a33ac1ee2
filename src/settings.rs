//! Game settings
//!
//! Canvas size, seed, default selector value and balance. Read from a JSON file
//! on native and built from the page's canvas size on the web.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::error::Result;
use crate::sim::{Canvas, FormType};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Canvas width in pixels
    pub canvas_width: f32,
    /// Canvas height in pixels
    pub canvas_height: f32,
    /// Run seed; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Form type preselected in the selector
    pub default_form_type: Option<FormType>,
    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            seed: None,
            default_form_type: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Settings for a canvas of the given size, everything else default
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    /// Parse settings from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.canvas()?;
        self.tuning.validate()
    }

    /// The canvas described by these settings
    pub fn canvas(&self) -> Result<Canvas> {
        Canvas::new(self.canvas_width, self.canvas_height)
    }

    /// Seed to use for a run: the configured one, or the given fallback
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.canvas_width, DEFAULT_CANVAS_WIDTH);
        assert_eq!(settings.canvas_height, DEFAULT_CANVAS_HEIGHT);
        assert!(settings.default_form_type.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let settings =
            Settings::from_json(r#"{ "canvas_width": 320, "default_form_type": "square" }"#)
                .unwrap();
        assert_eq!(settings.canvas_width, 320.0);
        assert_eq!(settings.canvas_height, DEFAULT_CANVAS_HEIGHT);
        assert_eq!(settings.default_form_type, Some(FormType::Square));
    }

    #[test]
    fn test_from_json_rejects_bad_canvas() {
        let err = Settings::from_json(r#"{ "canvas_width": 0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidCanvas { .. }));
    }

    #[test]
    fn test_from_json_rejects_infinite_tuning() {
        // Out of f32 range, so these parse as infinity
        for json in [
            r#"{ "tuning": { "split_jitter": 1e39 } }"#,
            r#"{ "tuning": { "point_scale": 1e39, "min_forms": 3, "max_forms": 3 } }"#,
        ] {
            let err = Settings::from_json(json).unwrap_err();
            assert!(matches!(err, GameError::InvalidTuning(_)), "{json}");
        }
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, GameError::Json(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::with_canvas(640.0, 480.0);
        settings.seed = Some(42);
        settings.tuning.max_forms = 7;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.canvas_width, 640.0);
        assert_eq!(loaded.seed, Some(42));
        assert_eq!(loaded.tuning.max_forms, 7);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load_from(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }

    #[test]
    fn test_seed_or() {
        let mut settings = Settings::default();
        assert_eq!(settings.seed_or(7), 7);
        settings.seed = Some(3);
        assert_eq!(settings.seed_or(7), 3);
    }
}
