//! Frame snapshot renderer: writes a [`Frame`] as an SVG file, selection
//! chrome and labels included.

use kurbo::{Rect, Stroke};
use pathsketch_core::export::xml_escape;
use pathsketch_render::{DrawCommand, Frame, RenderResult, Renderer, RendererError};
use peniko::Color;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

/// Renders frames to an SVG file on disk.
pub struct SvgSnapshotRenderer {
    path: PathBuf,
    width: f64,
    height: f64,
    last: Option<String>,
}

impl SvgSnapshotRenderer {
    /// Create a renderer writing to `path` with the given canvas size.
    pub fn new(path: PathBuf, width: f64, height: f64) -> Self {
        Self {
            path,
            width,
            height,
            last: None,
        }
    }

    /// SVG written by the last successful render.
    pub fn last_snapshot(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Serialize a frame to an SVG document.
    pub fn to_svg(&self, frame: &Frame) -> String {
        let (width, height) = (self.width, self.height);
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
        );

        for command in &frame.commands {
            match command {
                DrawCommand::Clear(color) => {
                    let _ = writeln!(
                        out,
                        r#"  <rect x="0" y="0" width="{width}" height="{height}"{}/>"#,
                        fill_attrs(Some(*color)),
                    );
                }
                DrawCommand::Path {
                    path,
                    stroke,
                    stroke_color,
                    fill,
                } => {
                    let _ = writeln!(
                        out,
                        r#"  <path d="{}"{}{}/>"#,
                        path.to_svg(),
                        fill_attrs(*fill),
                        stroke_attrs(stroke, *stroke_color),
                    );
                }
                DrawCommand::Rect {
                    rect,
                    stroke,
                    stroke_color,
                    fill,
                } => {
                    let _ = writeln!(
                        out,
                        r#"  <rect{}{}{}/>"#,
                        rect_attrs(*rect),
                        fill_attrs(*fill),
                        stroke_attrs(stroke, *stroke_color),
                    );
                }
                DrawCommand::Text(label) => {
                    let _ = writeln!(
                        out,
                        r#"  <text x="{}" y="{}" font-size="{}" font-family="Arial"{}>{}</text>"#,
                        label.position.x,
                        label.position.y,
                        label.font_size,
                        fill_attrs(Some(label.color)),
                        xml_escape(&label.text),
                    );
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

impl Renderer for SvgSnapshotRenderer {
    fn render(&mut self, frame: &Frame) -> RenderResult<()> {
        let svg = self.to_svg(frame);
        fs::write(&self.path, &svg).map_err(|e| {
            RendererError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        log::info!("Wrote frame snapshot to {}", self.path.display());
        self.last = Some(svg);
        Ok(())
    }
}

fn rect_attrs(rect: Rect) -> String {
    format!(
        r#" x="{}" y="{}" width="{}" height="{}""#,
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    )
}

fn fill_attrs(fill: Option<Color>) -> String {
    match fill {
        Some(color) => {
            let (hex, opacity) = hex_color(color);
            match opacity {
                Some(opacity) => format!(r#" fill="{hex}" fill-opacity="{opacity}""#),
                None => format!(r#" fill="{hex}""#),
            }
        }
        None => r#" fill="none""#.to_string(),
    }
}

fn stroke_attrs(stroke: &Stroke, color: Color) -> String {
    let (hex, opacity) = hex_color(color);
    let mut attrs = format!(r#" stroke="{hex}" stroke-width="{}""#, stroke.width);
    if let Some(opacity) = opacity {
        let _ = write!(attrs, r#" stroke-opacity="{opacity}""#);
    }
    if stroke.start_cap == kurbo::Cap::Round {
        attrs.push_str(r#" stroke-linecap="round""#);
    }
    if stroke.join == kurbo::Join::Round {
        attrs.push_str(r#" stroke-linejoin="round""#);
    }
    if !stroke.dash_pattern.is_empty() {
        let dashes: Vec<String> = stroke.dash_pattern.iter().map(f64::to_string).collect();
        let _ = write!(attrs, r#" stroke-dasharray="{}""#, dashes.join(" "));
    }
    attrs
}

/// `#rrggbb` plus an opacity when the color is not fully opaque.
fn hex_color(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = (rgba.a < u8::MAX).then(|| f64::from(rgba.a) / 255.0);
    (hex, opacity)
}
