//! Renderer trait abstraction.

use crate::frame::Frame;
use pathsketch_core::canvas::Canvas;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Draw the dimension label for the selected and in-progress path.
    pub show_preview: bool,
    /// Background color.
    pub background_color: Color,
    /// Selection box and handle border color.
    pub selection_color: Color,
    /// Dimension label color.
    pub label_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            show_preview: true,
            background_color: Color::WHITE,
            selection_color: Color::from_rgba8(0, 102, 255, 255),
            label_color: Color::from_rgba8(102, 102, 102, 255),
        }
    }

    /// Enable or disable the dimension label.
    pub fn with_preview(mut self, show_preview: bool) -> Self {
        self.show_preview = show_preview;
        self
    }
}

/// Trait for rendering backends.
///
/// A backend receives a fully built [`Frame`] and draws it, in order.
pub trait Renderer {
    /// Draw one frame.
    fn render(&mut self, frame: &Frame) -> RenderResult<()>;
}

/// Parse a CSS color string, falling back to black when it is not
/// recognized.
pub fn parse_css_color(css: &str) -> Color {
    match parse_color(css) {
        Ok(color) => color.to_alpha_color::<Srgb>(),
        Err(err) => {
            log::warn!("Unrecognized color {:?} ({:?}), drawing in black", css, err);
            Color::BLACK
        }
    }
}
