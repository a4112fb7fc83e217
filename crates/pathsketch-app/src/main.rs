//! Command line entry point.

use clap::Parser;
use pathsketch_app::AppConfig;

fn main() {
    env_logger::init();
    log::info!("Starting PathSketch");

    let config = AppConfig::parse();
    match pathsketch_app::run(&config) {
        Ok(summary) => {
            println!(
                "{} path(s) exported to {}",
                summary.path_count,
                summary.export_path.display()
            );
            if let Some(frame) = summary.frame_path {
                println!("frame written to {}", frame.display());
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
