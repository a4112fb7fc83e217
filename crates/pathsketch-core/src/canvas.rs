//! Canvas document and the pointer interaction state machine.

use crate::export::{self, ColorMode, SvgExport};
use crate::geometry::{self, FlipAxis};
use crate::hit::{self, ResizeHandle};
use crate::shapes::{Path, ShapeKind, is_valid_length, synthesize};
use crate::snap;
use crate::tools::{DrawMode, ToolSettings};
use kurbo::Point;
use std::f64::consts::{PI, TAU};

/// Ordered collection of committed paths. Insertion order is z-order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    paths: Vec<Path>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path on top of the others.
    pub fn add_path(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Remove the path at `index`, shifting later paths down.
    pub fn remove_path(&mut self, index: usize) -> Option<Path> {
        (index < self.paths.len()).then(|| self.paths.remove(index))
    }

    /// Remove all paths.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Path> {
        self.paths.get_mut(index)
    }

    /// All paths, back to front.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Index of the first path hit at `point`, scanning oldest first.
    ///
    /// When paths overlap this favors the oldest one, not the one drawn on
    /// top.
    pub fn path_at(&self, point: Point) -> Option<usize> {
        self.paths
            .iter()
            .position(|path| hit::point_in_path(path, point))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Current pointer interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Recording a freehand stroke.
    DrawingFreehand { path: Path },
    /// Dragging out a parametric shape. `preview` is rebuilt on every move.
    DrawingShape {
        start: Point,
        kind: ShapeKind,
        preview: Option<Path>,
    },
    /// Dragging the selected path.
    Moving { anchor: Point },
    /// Dragging one of the selected path's handles.
    Resizing { handle: ResizeHandle, anchor: Point },
    /// Rotating the selected path about its center. Armed without an anchor
    /// until the next pointer position is seen.
    Rotating { anchor: Option<Point>, angle: f64 },
}

impl Interaction {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Interaction::Idle => "idle",
            Interaction::DrawingFreehand { .. } => "drawingFreehand",
            Interaction::DrawingShape { .. } => "drawingShape",
            Interaction::Moving { .. } => "moving",
            Interaction::Resizing { .. } => "resizing",
            Interaction::Rotating { .. } => "rotating",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// Whether a new path is being drawn.
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            Interaction::DrawingFreehand { .. } | Interaction::DrawingShape { .. }
        )
    }
}

/// Drawing surface state: document, selection, and the gesture in progress.
///
/// Tool settings are not owned here. Every event takes the caller's
/// [`ToolSettings`] and reads them at transition time.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    document: Document,
    selected: Option<usize>,
    interaction: Interaction,
    last_export: Option<String>,
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas holding `paths`. Incomplete or non-finite paths are
    /// dropped.
    pub fn with_paths(paths: impl IntoIterator<Item = Path>) -> Self {
        let mut canvas = Self::new();
        for path in paths {
            canvas.commit(path);
        }
        canvas
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// All committed paths, back to front.
    pub fn paths(&self) -> &[Path] {
        self.document.paths()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Index of the selected path.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected path, if the selection is valid.
    pub fn selected_path(&self) -> Option<&Path> {
        self.selected.and_then(|index| self.document.get(index))
    }

    /// The path being drawn, if any.
    pub fn in_progress(&self) -> Option<&Path> {
        match &self.interaction {
            Interaction::DrawingFreehand { path } => Some(path),
            Interaction::DrawingShape { preview, .. } => preview.as_ref(),
            _ => None,
        }
    }

    /// Accumulated angle of the current rotation gesture.
    pub fn rotation_angle(&self) -> Option<f64> {
        match self.interaction {
            Interaction::Rotating { angle, .. } => Some(angle),
            _ => None,
        }
    }

    /// Content of the last export, until the canvas is cleared.
    pub fn last_export(&self) -> Option<&str> {
        self.last_export.as_deref()
    }

    /// Select the path at `index`. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.document.len()).then_some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Handle a pointer press.
    ///
    /// Checked in order: a handle of the selected path, the selected path
    /// itself, then (in edit or shape mode) any path. Only when nothing is
    /// hit does the press start drawing.
    pub fn pointer_down(&mut self, pos: Point, settings: &ToolSettings) {
        if !is_finite(pos) {
            log::debug!("Ignoring non-finite pointer position {:?}", pos);
            return;
        }

        if let Interaction::Rotating { anchor, .. } = &mut self.interaction {
            if self.selected.is_some() {
                *anchor = Some(pos);
                return;
            }
        }

        if !self.interaction.is_idle() {
            log::debug!(
                "Pointer down while {}; ending previous gesture",
                self.interaction.name()
            );
            self.pointer_up();
        }

        if let Some(path) = self.selected_path() {
            if let Some(handle) = hit::resize_handle_at(path, pos) {
                if !handle.is_corner() {
                    log::debug!("Edge handle {} grabbed; dragging it is a no-op", handle.id());
                }
                self.interaction = Interaction::Resizing {
                    handle,
                    anchor: pos,
                };
                return;
            }
            if hit::point_in_path(path, pos) {
                self.interaction = Interaction::Moving { anchor: pos };
                return;
            }
        }

        if settings.edit_mode || settings.draw_mode == DrawMode::Shape {
            match self.document.path_at(pos) {
                Some(index) => {
                    self.selected = Some(index);
                    self.interaction = Interaction::Moving { anchor: pos };
                    return;
                }
                None => self.selected = None,
            }
        }

        if !settings.style().is_valid() {
            log::warn!(
                "Ignoring pointer down with invalid style (width {}, radius {})",
                settings.stroke_width,
                settings.border_radius
            );
            return;
        }

        match settings.draw_mode {
            DrawMode::Shape => match settings.shape {
                Some(kind) => {
                    let start = snap_point(self.document.paths(), kind, pos, settings);
                    self.interaction = Interaction::DrawingShape {
                        start,
                        kind,
                        preview: None,
                    };
                }
                None => log::debug!("Shape mode without a shape; staying idle"),
            },
            DrawMode::Freehand => {
                let mut path = Path::new(settings.style());
                path.add_point(pos);
                self.interaction = Interaction::DrawingFreehand { path };
            }
        }
    }

    /// Handle pointer motion for the current interaction.
    pub fn pointer_move(&mut self, pos: Point, settings: &ToolSettings) {
        if !is_finite(pos) {
            log::debug!("Ignoring non-finite pointer position {:?}", pos);
            return;
        }

        let selected = self.selected.and_then(|index| self.document.get_mut(index));

        match &mut self.interaction {
            Interaction::Idle => {}
            Interaction::Moving { anchor } => {
                let delta = pos - *anchor;
                if let Some(path) = selected {
                    *path = geometry::translate(path, delta.x, delta.y);
                }
                *anchor = pos;
            }
            Interaction::Resizing { handle, anchor } => {
                if let Some(path) = selected {
                    let bounds = path.bounds();
                    let (scale_x, scale_y) =
                        geometry::resize_factors(bounds, *handle, *anchor, pos);
                    *path = geometry::scale(path, scale_x, scale_y, bounds.center());
                }
                *anchor = pos;
            }
            Interaction::Rotating { anchor, angle } => {
                let Some(path) = selected else {
                    return;
                };
                let center = path.bounds().center();
                if let Some(previous) = *anchor {
                    let delta =
                        normalize_angle((pos - center).atan2() - (previous - center).atan2());
                    *path = geometry::rotate(path, delta, center);
                    *angle += delta;
                }
                *anchor = Some(pos);
            }
            Interaction::DrawingFreehand { path } => {
                path.add_point(pos);
            }
            Interaction::DrawingShape {
                start,
                kind,
                preview,
            } => {
                let end = snap_point(self.document.paths(), *kind, pos, settings);
                *preview = Some(synthesize(*kind, *start, end, &settings.style()));
            }
        }
    }

    /// Handle a pointer release: commit a drawn path with at least two
    /// points, or end a move/resize/rotate with the selection kept.
    pub fn pointer_up(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::DrawingFreehand { path } => self.commit(path),
            Interaction::DrawingShape {
                preview: Some(path),
                ..
            } => self.commit(path),
            Interaction::DrawingShape { preview: None, .. } => {
                log::debug!("Discarded shape gesture without movement");
            }
            Interaction::Idle
            | Interaction::Moving { .. }
            | Interaction::Resizing { .. }
            | Interaction::Rotating { .. } => {}
        }
    }

    /// End an abandoned gesture (focus loss, pointer leaving the surface).
    pub fn cancel(&mut self) {
        self.pointer_up();
    }

    /// Remove the selected path.
    pub fn delete_selected(&mut self) {
        let Some(index) = self.selected.take() else {
            return;
        };
        if self.document.remove_path(index).is_some() {
            log::debug!("Deleted path {}", index);
        }
        if !self.interaction.is_drawing() {
            self.interaction = Interaction::Idle;
        }
    }

    /// Empty the document and reset selection, gesture and cached export.
    pub fn clear_all(&mut self) {
        self.document.clear();
        self.selected = None;
        self.interaction = Interaction::Idle;
        self.last_export = None;
        log::debug!("Cleared canvas");
    }

    /// Toggle the fill flag of the selected path.
    pub fn toggle_fill(&mut self) {
        self.update_selected(|path| {
            let mut path = path.clone();
            path.style.fill = !path.style.fill;
            path
        });
    }

    /// Set the color of the selected path. Empty colors are ignored.
    pub fn recolor_selected(&mut self, color: &str) {
        if color.trim().is_empty() {
            log::debug!("Ignoring empty color");
            return;
        }
        self.update_selected(|path| {
            let mut path = path.clone();
            path.style.color = color.to_string();
            path
        });
    }

    /// Set the stroke width of the selected path. Negative or non-finite
    /// widths are ignored.
    pub fn set_stroke_width_selected(&mut self, width: f64) {
        if !is_valid_length(width) {
            log::debug!("Ignoring invalid stroke width {}", width);
            return;
        }
        self.update_selected(|path| {
            let mut path = path.clone();
            path.style.width = width;
            path
        });
    }

    /// Mirror the selected path about its bounding-box center.
    pub fn flip_selected(&mut self, axis: FlipAxis) {
        self.update_selected(|path| geometry::flip(path, axis, geometry::center(path)));
    }

    /// Arm rotation of the selected path. The next pointer position becomes
    /// the rotation anchor.
    pub fn begin_rotate(&mut self) {
        if self.selected_path().is_none() {
            return;
        }
        if self.interaction.is_drawing() {
            self.pointer_up();
        }
        self.interaction = Interaction::Rotating {
            anchor: None,
            angle: 0.0,
        };
    }

    /// Serialize the document to SVG and remember the result.
    pub fn export_svg(&mut self, width: f64, height: f64, color_mode: ColorMode) -> SvgExport {
        let content = export::serialize(self.document.paths(), width, height, color_mode);
        log::info!(
            "Exported {} path(s) as {} ({} bytes)",
            self.document.len(),
            export::EXPORT_FILE_NAME,
            content.len()
        );
        self.last_export = Some(content.clone());
        SvgExport::new(content)
    }

    fn update_selected(&mut self, f: impl FnOnce(&Path) -> Path) {
        let Some(path) = self.selected.and_then(|index| self.document.get_mut(index)) else {
            return;
        };
        *path = f(path);
    }

    fn commit(&mut self, path: Path) {
        if path.is_complete() && path.is_finite() && path.style.is_valid() {
            self.document.add_path(path);
            log::debug!("Committed path #{}", self.document.len() - 1);
        } else {
            log::debug!("Discarded path with {} point(s)", path.len());
        }
    }
}

/// Snap `pos` to `paths` when `settings` snap endpoints of `kind`.
fn snap_point(paths: &[Path], kind: ShapeKind, pos: Point, settings: &ToolSettings) -> Point {
    if settings.snaps(kind) {
        snap::snap_to_paths(paths, pos).point
    } else {
        pos
    }
}

/// Wrap an angle into `(-π, π]`.
fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
