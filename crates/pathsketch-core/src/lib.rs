//! PathSketch Core Library
//!
//! Path geometry and interaction engine for the PathSketch drawing surface:
//! the path model, affine transforms, hit testing, shape synthesis, point
//! snapping, the pointer state machine and SVG export.

pub mod canvas;
pub mod export;
pub mod geometry;
pub mod hit;
pub mod shapes;
pub mod snap;
pub mod tools;

pub use canvas::{Canvas, Document, Interaction};
pub use export::{ColorMode, EXPORT_FILE_NAME, EXPORT_MIME_TYPE, SvgExport};
pub use geometry::FlipAxis;
pub use hit::{HANDLE_SIZE, HIT_PADDING, ResizeHandle};
pub use shapes::{Path, PathStyle, ShapeKind};
pub use snap::{SNAP_THRESHOLD, SnapResult};
pub use tools::{ConfigError, ConfigResult, DrawMode, ToolSettings};
