//! PathSketch application shell.
//!
//! Replays recorded pointer and control-panel events against a canvas,
//! then writes the SVG export and, on request, a snapshot of the final
//! frame.

mod app;
mod error;
mod input;
mod script;
mod snapshot;

pub use app::{AppConfig, FRAME_FILE_NAME, RunSummary, run, save_export};
pub use error::{AppError, AppResult};
pub use input::{PointerInput, device_position};
pub use script::{Script, ScriptEvent, Session};
pub use snapshot::SvgSnapshotRenderer;
