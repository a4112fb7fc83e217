//! SVG export of a document.
//!
//! Each committed path becomes one `<path>` element whose `d` attribute is a
//! polyline of `M`/`L` commands over the raw coordinates. Output depends only
//! on its inputs, so the same document always serializes to the same bytes.

use crate::shapes::Path;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// File name handed to the export trigger.
pub const EXPORT_FILE_NAME: &str = "drawing.svg";
/// Content type handed to the export trigger.
pub const EXPORT_MIME_TYPE: &str = "image/svg+xml";

const MONOCHROME_COLOR: &str = "black";

/// How path colors are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Each path keeps its own color.
    #[default]
    Colored,
    /// Every path is written in black.
    Monochrome,
}

/// Serialized drawing plus what the export trigger needs to save it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgExport {
    pub content: String,
    pub file_name: &'static str,
    pub mime_type: &'static str,
}

impl SvgExport {
    /// Wrap serialized SVG content.
    pub fn new(content: String) -> Self {
        Self {
            content,
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
        }
    }
}

/// Serialize `paths` into a standalone SVG document of the given size.
///
/// Paths with fewer than two points are skipped.
pub fn serialize(paths: &[Path], width: f64, height: f64, color_mode: ColorMode) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    );

    for path in paths {
        let Some(d) = path_data(path) else {
            log::debug!("Skipping path with {} point(s) on export", path.len());
            continue;
        };

        let color = match color_mode {
            ColorMode::Colored => xml_escape(&path.style.color),
            ColorMode::Monochrome => MONOCHROME_COLOR.to_string(),
        };
        let fill = if path.style.fill { color.as_str() } else { "none" };
        let radius = path.style.border_radius;

        let _ = writeln!(
            out,
            r#"  <path d="{d}" fill="{fill}" stroke="{color}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" rx="{radius}" ry="{radius}"/>"#,
            path.style.width,
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Build the `d` attribute: `M x0 y0 L x1 y1 ...`.
fn path_data(path: &Path) -> Option<String> {
    if !path.is_complete() {
        return None;
    }

    let mut d = String::new();
    for (i, point) in path.points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{command} {} {}", point.x, point.y);
    }
    Some(d)
}

/// Escape the XML special characters, for attribute values and text.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::PathStyle;
    use kurbo::Point;

    fn line(style: PathStyle) -> Path {
        Path::from_points(vec![Point::new(10.0, 20.0), Point::new(30.5, 40.25)], style)
    }

    #[test]
    fn test_single_unfilled_line() {
        let svg = serialize(&[line(PathStyle::default())], 100.0, 100.0, ColorMode::Colored);
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"100\" viewBox=\"0 0 100 100\">\n  \
             <path d=\"M 10 20 L 30.5 40.25\" fill=\"none\" stroke=\"black\" stroke-width=\"3\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\" rx=\"0\" ry=\"0\"/>\n</svg>\n"
        );
    }

    #[test]
    fn test_filled_colored_path() {
        let style = PathStyle::new(4.0, true)
            .with_color("#EF4444")
            .with_border_radius(8.0);
        let svg = serialize(&[line(style)], 640.0, 480.0, ColorMode::Colored);
        assert!(svg.contains(r#"viewBox="0 0 640 480""#));
        assert!(svg.contains(r##"fill="#EF4444" stroke="#EF4444" stroke-width="4""##));
        assert!(svg.contains(r#"rx="8" ry="8""#));
    }

    #[test]
    fn test_monochrome_overrides_color() {
        let style = PathStyle::new(2.0, true).with_color("#3B82F6");
        let svg = serialize(&[line(style)], 10.0, 10.0, ColorMode::Monochrome);
        assert!(svg.contains(r#"fill="black" stroke="black""#));
        assert!(!svg.contains("#3B82F6"));
    }

    #[test]
    fn test_raw_coordinates_are_not_rounded() {
        let path = Path::from_points(
            vec![Point::new(0.1, 1.0 / 3.0), Point::new(-2.0, 1e-7)],
            PathStyle::default(),
        );
        let svg = serialize(&[path], 10.0, 10.0, ColorMode::Colored);
        assert!(svg.contains(&format!("M 0.1 {} L -2 0.0000001", 1.0_f64 / 3.0)));
    }

    #[test]
    fn test_incomplete_paths_skipped() {
        let single = Path::from_points(vec![Point::ZERO], PathStyle::default());
        let svg = serialize(&[single, Path::default()], 10.0, 10.0, ColorMode::Colored);
        assert!(!svg.contains("<path"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_color_is_escaped() {
        let style = PathStyle::default().with_color(r#"red" onload="x"#);
        let svg = serialize(&[line(style)], 10.0, 10.0, ColorMode::Colored);
        assert!(svg.contains("stroke=\"red&quot; onload=&quot;x\""));
    }

    #[test]
    fn test_deterministic_and_ordered() {
        let paths = vec![
            line(PathStyle::default().with_color("#22C55E")),
            line(PathStyle::default().with_color("#A855F7")),
        ];
        let a = serialize(&paths, 50.0, 50.0, ColorMode::Colored);
        let b = serialize(&paths, 50.0, 50.0, ColorMode::Colored);
        assert_eq!(a, b);
        let first = a.find("#22C55E").unwrap();
        let second = a.find("#A855F7").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_export_metadata() {
        let export = SvgExport::new(String::from("<svg/>"));
        assert_eq!(export.file_name, "drawing.svg");
        assert_eq!(export.mime_type, "image/svg+xml");
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(
            xml_escape("a < b & 'c' > \"d\""),
            "a &lt; b &amp; &apos;c&apos; &gt; &quot;d&quot;"
        );
        assert_eq!(xml_escape("10px × 20px"), "10px × 20px");
    }
}
