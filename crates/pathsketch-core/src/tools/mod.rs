//! Tool configuration supplied to the canvas on every pointer event.

use crate::shapes::{DEFAULT_COLOR, DEFAULT_STROKE_WIDTH, PathStyle, ShapeKind, is_valid_length};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Stroke widths offered by the control panel.
pub const STROKE_WIDTHS: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

/// Border radii offered by the control panel.
pub const BORDER_RADII: [f64; 6] = [0.0, 4.0, 8.0, 16.0, 24.0, 32.0];

/// Color palette offered by the control panel.
pub const COLORS: [&str; 10] = [
    "#000000", "#FFFFFF", "#EF4444", "#EAB308", "#22C55E", "#3B82F6", "#6366F1", "#A855F7",
    "#EC4899", "#6B7280",
];

/// Settings errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// What a pointer-down on empty space starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Freehand strokes.
    #[default]
    Freehand,
    /// Parametric shapes (see [`ToolSettings::shape`]).
    Shape,
}

/// Mode flags and active style, read by the canvas at transition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub draw_mode: DrawMode,
    /// When set, pointer-down on an existing path selects it even in
    /// freehand mode.
    pub edit_mode: bool,
    pub stroke_width: f64,
    pub fill: bool,
    pub color: String,
    pub border_radius: f64,
    /// Shape drawn in [`DrawMode::Shape`]. `None` makes shape mode inert.
    pub shape: Option<ShapeKind>,
    /// Snap line endpoints to existing points.
    pub snap_enabled: bool,
    /// Draw the dimension label for the selected and in-progress path.
    pub show_preview: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::Freehand,
            edit_mode: false,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill: false,
            color: DEFAULT_COLOR.to_string(),
            border_radius: 0.0,
            shape: None,
            snap_enabled: false,
            show_preview: true,
        }
    }
}

impl ToolSettings {
    /// Settings for drawing `kind` in shape mode.
    pub fn for_shape(kind: ShapeKind) -> Self {
        Self {
            draw_mode: DrawMode::Shape,
            shape: Some(kind),
            ..Self::default()
        }
    }

    /// Style applied to newly drawn paths.
    pub fn style(&self) -> PathStyle {
        PathStyle::new(self.stroke_width, self.fill)
            .with_color(self.color.clone())
            .with_border_radius(self.border_radius)
    }

    /// Whether endpoints of a `kind` shape snap to existing points. Only
    /// lines snap.
    pub fn snaps(&self, kind: ShapeKind) -> bool {
        self.snap_enabled && kind == ShapeKind::Line
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn from_path(path: &std::path::Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded tool settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize settings to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject values that would put non-finite or negative geometry into a
    /// document.
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_valid_length(self.stroke_width) {
            return Err(ConfigError::Invalid(format!(
                "stroke_width must be a non-negative number, got {}",
                self.stroke_width
            )));
        }
        if !is_valid_length(self.border_radius) {
            return Err(ConfigError::Invalid(format!(
                "border_radius must be a non-negative number, got {}",
                self.border_radius
            )));
        }
        if self.color.trim().is_empty() {
            return Err(ConfigError::Invalid("color must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ToolSettings::default();
        assert_eq!(settings.draw_mode, DrawMode::Freehand);
        assert!(!settings.edit_mode);
        assert_eq!(settings.stroke_width, 3.0);
        assert_eq!(settings.color, "black");
        assert!(settings.shape.is_none());
        assert!(settings.show_preview);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let json = r#"{"draw_mode": "shape", "shape": "line", "snap_enabled": true}"#;
        let settings = ToolSettings::from_json(json).unwrap();
        assert_eq!(settings.draw_mode, DrawMode::Shape);
        assert_eq!(settings.shape, Some(ShapeKind::Line));
        assert!(settings.snaps(ShapeKind::Line));
        assert!(!settings.snaps(ShapeKind::Square));
        assert!(!ToolSettings::default().snaps(ShapeKind::Line));
        assert_eq!(settings.stroke_width, DEFAULT_STROKE_WIDTH);
        assert!(settings.show_preview);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            ToolSettings::from_json(r#"{"stroke_width": -1}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ToolSettings::from_json(r#"{"border_radius": -4}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ToolSettings::from_json(r#"{"color": "  "}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ToolSettings::from_json(r#"{"shape": "hexagon"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(ToolSettings::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_missing_path() {
        let result = ToolSettings::from_path(std::path::Path::new("/nonexistent/settings.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_style_from_settings() {
        let settings = ToolSettings {
            stroke_width: 6.0,
            fill: true,
            color: "#EF4444".to_string(),
            border_radius: 8.0,
            ..ToolSettings::default()
        };
        let style = settings.style();
        assert_eq!(style.width, 6.0);
        assert!(style.fill);
        assert_eq!(style.color, "#EF4444");
        assert_eq!(style.border_radius, 8.0);
    }

    #[test]
    fn test_json_roundtrip_keeps_shape_mode() {
        let settings = ToolSettings::for_shape(ShapeKind::Triangle);
        let back = ToolSettings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_palettes() {
        assert_eq!(STROKE_WIDTHS.len(), 5);
        assert_eq!(BORDER_RADII[0], 0.0);
        assert!(COLORS.iter().all(|c| c.starts_with('#') && c.len() == 7));
        assert!(STROKE_WIDTHS.iter().all(|w| w.is_finite()));
    }
}
