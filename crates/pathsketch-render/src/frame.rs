//! Display list for one redraw of the canvas.

use crate::renderer::{RenderContext, parse_css_color};
use kurbo::{BezPath, Cap, Join, Point, Rect, Stroke};
use pathsketch_core::canvas::Canvas;
use pathsketch_core::hit::{self, HANDLE_SIZE};
use pathsketch_core::shapes::Path;
use peniko::Color;

/// Gap between a selected path's bounds and its dashed selection box.
pub const SELECTION_PADDING: f64 = 10.0;
/// Dash pattern of the selection box.
pub const SELECTION_DASHES: [f64; 2] = [5.0, 5.0];
/// Horizontal offset of the dimension label from the bounds' right edge.
pub const LABEL_OFFSET: f64 = 10.0;
/// Font size of the dimension label.
pub const LABEL_FONT_SIZE: f64 = 12.0;

/// Positioned text.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    /// Baseline origin.
    pub position: Point,
    pub font_size: f64,
    pub color: Color,
}

/// A single drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Clear the surface.
    Clear(Color),
    /// A drawn path: optional fill, then stroke.
    Path {
        path: BezPath,
        stroke: Stroke,
        stroke_color: Color,
        fill: Option<Color>,
    },
    /// Rectangle chrome (selection box, handles).
    Rect {
        rect: Rect,
        stroke: Stroke,
        stroke_color: Color,
        fill: Option<Color>,
    },
    /// Text label.
    Text(Label),
}

/// Ordered display list. Commands are drawn first to last.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Build the frame for the canvas in `ctx`.
    ///
    /// Committed paths are drawn back to front. The selected path is
    /// followed by its selection box, handles and (with preview enabled) its
    /// dimension label. The in-progress path is drawn last.
    pub fn build(ctx: &RenderContext) -> Self {
        let mut frame = Self::default();
        frame.push(DrawCommand::Clear(ctx.background_color));

        let canvas = ctx.canvas;
        for (index, path) in canvas.paths().iter().enumerate() {
            frame.push_path(path);
            if canvas.selected_index() == Some(index) {
                frame.push_selection(ctx, path);
                if ctx.show_preview {
                    frame.push_label(ctx, path);
                }
            }
        }

        if let Some(path) = canvas.in_progress() {
            frame.push_path(path);
            if ctx.show_preview {
                frame.push_label(ctx, path);
            }
        }

        log::trace!("Built frame with {} commands", frame.commands.len());
        frame
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the text labels in the frame.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(label) => Some(label),
            _ => None,
        })
    }

    fn push_path(&mut self, path: &Path) {
        if !path.is_complete() {
            return;
        }

        let color = parse_css_color(&path.style.color);
        let stroke = Stroke::new(path.style.width)
            .with_caps(Cap::Round)
            .with_join(Join::Round);
        let (path_data, fill) = if path.style.fill {
            (path.to_closed_bez_path(), Some(color))
        } else {
            (path.to_bez_path(), None)
        };

        self.push(DrawCommand::Path {
            path: path_data,
            stroke,
            stroke_color: color,
            fill,
        });
    }

    fn push_selection(&mut self, ctx: &RenderContext, path: &Path) {
        let bounds = path.bounds();
        self.push(DrawCommand::Rect {
            rect: bounds.inflate(SELECTION_PADDING, SELECTION_PADDING),
            stroke: Stroke::new(1.0).with_dashes(0.0, SELECTION_DASHES),
            stroke_color: ctx.selection_color,
            fill: None,
        });

        let half = HANDLE_SIZE / 2.0;
        for (_, center) in hit::handles(path) {
            self.push(DrawCommand::Rect {
                rect: Rect::new(center.x - half, center.y - half, center.x + half, center.y + half),
                stroke: Stroke::new(1.0),
                stroke_color: ctx.selection_color,
                fill: Some(Color::WHITE),
            });
        }
    }

    fn push_label(&mut self, ctx: &RenderContext, path: &Path) {
        if !path.is_complete() {
            return;
        }
        let bounds = path.bounds();
        self.push(DrawCommand::Text(Label {
            text: dimension_label(bounds),
            position: Point::new(bounds.x1 + LABEL_OFFSET, bounds.y1),
            font_size: LABEL_FONT_SIZE,
            color: ctx.label_color,
        }));
    }
}

/// Build the frame for `canvas` with default colors.
pub fn build_frame(canvas: &Canvas, show_preview: bool) -> Frame {
    Frame::build(&RenderContext::new(canvas).with_preview(show_preview))
}

/// `"{w}px × {h}px"` with dimensions rounded to whole pixels.
fn dimension_label(bounds: Rect) -> String {
    format!(
        "{}px × {}px",
        bounds.width().round() as i64,
        bounds.height().round() as i64
    )
}
