//! PathSketch Render Library
//!
//! Turns canvas state into a backend-neutral display list ([`Frame`]) and
//! defines the [`Renderer`] trait that backends implement to draw it.

mod frame;
mod renderer;

pub use frame::{DrawCommand, Frame, Label, build_frame};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, parse_css_color};
