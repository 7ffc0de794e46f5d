//! Hike Track Scene - command-line entry point
//!
//! Loads one GPX track, builds its scene payload and presents it with the
//! selected backend on standard output.

mod logging;
mod settings;
mod summary;

use settings::{OutputFormat, Settings};
use std::process::ExitCode;
use summary::SummaryScene;
use track_scene_lib::{GeoJsonScene, pipeline};

async fn run(settings: &Settings) -> track_scene_lib::Result<()> {
    profiling::scope!("track_scene::run");

    let builder = settings.payload_builder();
    match settings.format {
        OutputFormat::Summary => {
            let mut scene = SummaryScene::new(std::io::stdout());
            pipeline::run(&settings.source, &builder, &mut scene)
                .await?
                .into_result()?;
        }
        OutputFormat::Geojson => {
            let mut scene = GeoJsonScene::new();
            pipeline::run(&settings.source, &builder, &mut scene)
                .await?
                .into_result()?;
            println!("{}", scene.to_string_pretty());
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let settings = Settings::from_cli();

    logging::setup_logging();
    logging::log_version_info();

    match run(&settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
