//! Gesture scripts: recorded pointer and control-panel events replayed
//! against a canvas.
//!
//! A script is JSON:
//! ```json
//! {
//!   "width": 800, "height": 600,
//!   "events": [
//!     { "type": "settings", "settings": { "draw_mode": "shape", "shape": "square" } },
//!     { "type": "down", "x": 10, "y": 10 },
//!     { "type": "move", "x": 60, "y": 60 },
//!     { "type": "up" }
//!   ]
//! }
//! ```
//! Pointer coordinates are client coordinates. Without an `element`
//! rectangle the element is assumed to cover the backing store exactly.

use crate::error::{AppError, AppResult};
use crate::input::PointerInput;
use kurbo::{Point, Rect, Size};
use pathsketch_core::canvas::Canvas;
use pathsketch_core::geometry::FlipAxis;
use pathsketch_core::tools::ToolSettings;
use serde::{Deserialize, Serialize};
use std::fs;

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Mouse press at a client position.
    Down { x: f64, y: f64 },
    /// Mouse motion.
    Move { x: f64, y: f64 },
    /// Mouse release.
    Up,
    /// Gesture abandoned (focus loss, pointer left the surface).
    Cancel,
    /// Touch start. The first touch drives the pointer.
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    TouchEnd,
    /// Replace the active tool settings.
    Settings { settings: ToolSettings },
    /// Select a path by index.
    Select { index: usize },
    /// Delete the selected path.
    Delete,
    /// Clear the canvas.
    Clear,
    ToggleFill,
    Recolor { color: String },
    StrokeWidth { width: f64 },
    Flip { axis: FlipAxis },
    /// Arm rotation of the selected path.
    Rotate,
}

/// A complete gesture script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Canvas backing-store width in pixels.
    pub width: f64,
    /// Canvas backing-store height in pixels.
    pub height: f64,
    /// On-screen rectangle of the canvas element, in client coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Rect>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parse a script from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let script: Self =
            serde_json::from_str(json).map_err(|e| AppError::Script(e.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    /// Load a script from a JSON file.
    pub fn from_path(path: &std::path::Path) -> AppResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    fn validate(&self) -> AppResult<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(AppError::Script(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Backing-store size of the canvas.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// On-screen element rectangle, defaulting to the backing store.
    pub fn element(&self) -> Rect {
        self.element.unwrap_or_else(|| self.size().to_rect())
    }
}

/// A canvas plus the settings and surface geometry events are applied with.
#[derive(Debug, Clone)]
pub struct Session {
    pub canvas: Canvas,
    pub settings: ToolSettings,
    element: Rect,
    backing: Size,
}

impl Session {
    /// Create a session with an empty canvas.
    pub fn new(element: Rect, backing: Size, settings: ToolSettings) -> Self {
        Self {
            canvas: Canvas::new(),
            settings,
            element,
            backing,
        }
    }

    /// Create a session sized for `script`.
    pub fn for_script(script: &Script, settings: ToolSettings) -> Self {
        Self::new(script.element(), script.size(), settings)
    }

    /// Apply every event in order.
    pub fn replay(&mut self, events: &[ScriptEvent]) -> AppResult<()> {
        for (index, event) in events.iter().enumerate() {
            self.apply(event).map_err(|e| match e {
                AppError::Script(msg) => AppError::Script(format!("event {}: {}", index, msg)),
                other => other,
            })?;
        }
        // A script that stops mid-gesture behaves like a lost pointer.
        if !self.canvas.interaction().is_idle() {
            log::debug!("Script ended during a gesture; cancelling it");
            self.canvas.cancel();
        }
        log::info!(
            "Replayed {} event(s), {} path(s) on canvas",
            events.len(),
            self.canvas.paths().len()
        );
        Ok(())
    }

    /// Apply one event.
    pub fn apply(&mut self, event: &ScriptEvent) -> AppResult<()> {
        match event {
            ScriptEvent::Down { x, y } => {
                if let Some(pos) = self.translate(PointerInput::Mouse(Point::new(*x, *y))) {
                    self.canvas.pointer_down(pos, &self.settings);
                }
            }
            ScriptEvent::Move { x, y } => {
                if let Some(pos) = self.translate(PointerInput::Mouse(Point::new(*x, *y))) {
                    self.canvas.pointer_move(pos, &self.settings);
                }
            }
            ScriptEvent::TouchStart { touches } => {
                if let Some(pos) = self.translate(PointerInput::Touch(touches.clone())) {
                    self.canvas.pointer_down(pos, &self.settings);
                }
            }
            ScriptEvent::TouchMove { touches } => {
                if let Some(pos) = self.translate(PointerInput::Touch(touches.clone())) {
                    self.canvas.pointer_move(pos, &self.settings);
                }
            }
            ScriptEvent::Up | ScriptEvent::TouchEnd => self.canvas.pointer_up(),
            ScriptEvent::Cancel => self.canvas.cancel(),
            ScriptEvent::Settings { settings } => {
                settings.validate()?;
                self.settings = settings.clone();
            }
            ScriptEvent::Select { index } => {
                if *index >= self.canvas.paths().len() {
                    return Err(AppError::Script(format!(
                        "no path at index {} ({} on canvas)",
                        index,
                        self.canvas.paths().len()
                    )));
                }
                self.canvas.select(*index);
            }
            ScriptEvent::Delete => self.canvas.delete_selected(),
            ScriptEvent::Clear => self.canvas.clear_all(),
            ScriptEvent::ToggleFill => self.canvas.toggle_fill(),
            ScriptEvent::Recolor { color } => self.canvas.recolor_selected(color),
            ScriptEvent::StrokeWidth { width } => self.canvas.set_stroke_width_selected(*width),
            ScriptEvent::Flip { axis } => self.canvas.flip_selected(*axis),
            ScriptEvent::Rotate => self.canvas.begin_rotate(),
        }
        Ok(())
    }

    fn translate(&self, input: PointerInput) -> Option<Point> {
        input.device_position(self.element, self.backing)
    }
}
