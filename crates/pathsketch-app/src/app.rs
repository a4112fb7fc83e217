//! Command line shell: replay a gesture script, export the drawing and
//! optionally snapshot the final frame.

use crate::error::{AppError, AppResult};
use crate::script::{Script, Session};
use crate::snapshot::SvgSnapshotRenderer;
use clap::Parser;
use pathsketch_core::export::{ColorMode, SvgExport};
use pathsketch_core::tools::ToolSettings;
use pathsketch_render::{Renderer, build_frame};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the frame snapshot written with `--frame`.
pub const FRAME_FILE_NAME: &str = "frame.svg";

/// Command line configuration.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Replay a drawing session and export it as SVG", long_about = None)]
pub struct AppConfig {
    /// Gesture script (JSON) to replay.
    pub script: PathBuf,

    /// Directory the exported files are written to.
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Initial tool settings (JSON).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Export every path in black.
    #[arg(long)]
    pub monochrome: bool,

    /// Also write the final frame, selection and labels included.
    #[arg(long)]
    pub frame: bool,
}

impl AppConfig {
    /// Configuration with default flags for `script`.
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            out: PathBuf::from("."),
            config: None,
            monochrome: false,
            frame: false,
        }
    }

    fn color_mode(&self) -> ColorMode {
        if self.monochrome {
            ColorMode::Monochrome
        } else {
            ColorMode::Colored
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub path_count: usize,
    pub export_path: PathBuf,
    pub frame_path: Option<PathBuf>,
}

/// Replay the script named by `config` and write its outputs.
pub fn run(config: &AppConfig) -> AppResult<RunSummary> {
    let settings = match &config.config {
        Some(path) => ToolSettings::from_path(path)?,
        None => ToolSettings::default(),
    };
    let script = Script::from_path(&config.script)?;
    log::info!(
        "Loaded {} with {} event(s) on a {}x{} canvas",
        config.script.display(),
        script.events.len(),
        script.width,
        script.height
    );

    let mut session = Session::for_script(&script, settings);
    session.replay(&script.events)?;

    fs::create_dir_all(&config.out)
        .map_err(|e| AppError::Io(format!("Failed to create {}: {}", config.out.display(), e)))?;

    let export = session
        .canvas
        .export_svg(script.width, script.height, config.color_mode());
    let export_path = save_export(&export, &config.out)?;

    let frame_path = if config.frame {
        let path = config.out.join(FRAME_FILE_NAME);
        let frame = build_frame(&session.canvas, session.settings.show_preview);
        let mut renderer = SvgSnapshotRenderer::new(path.clone(), script.width, script.height);
        renderer.render(&frame)?;
        Some(path)
    } else {
        None
    };

    Ok(RunSummary {
        path_count: session.canvas.paths().len(),
        export_path,
        frame_path,
    })
}

/// Write an export into `dir` under its download file name.
pub fn save_export(export: &SvgExport, dir: &Path) -> AppResult<PathBuf> {
    let path = dir.join(export.file_name);
    fs::write(&path, &export.content)
        .map_err(|e| AppError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    log::info!("Saved {} ({})", path.display(), export.mime_type);
    Ok(path)
}
