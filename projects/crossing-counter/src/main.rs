mod cli;
mod pipeline;
mod report;
mod run_artifacts;
mod run_context;

use anyhow::Result;
use cli::Args;
use pipeline::crossing::CountingLine;
use pipeline::driver;
use pipeline::engine::CountingEngine;
use pipeline::event_log::EventLog;
use std::path::Path;

fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse_args();
    let input_root = Path::new(&args.input_root);

    let stream_name = match &args.stream {
        Some(name) => name.clone(),
        None => {
            let streams = run_context::list_streams(input_root);
            if streams.is_empty() {
                tracing::info!("No track streams found under {:?}", input_root);
            }
            for stream in &streams {
                tracing::info!("Available stream: {:?}", stream);
            }
            return Ok(());
        }
    };

    let line_def = run_context::load_line_config(&input_root.join(&args.line_config))?;
    let metadata = run_context::create_run(Path::new(&args.output_root), &stream_name)?;

    let mut engine = CountingEngine::new(CountingLine::from_def(&line_def), line_def.gate_policy);
    let mut log = EventLog::new();

    let stream_path = input_root.join(&stream_name);
    let summary = driver::run_session(&stream_path, &mut engine, &mut log, args.fps)?;

    report::save_csv(log.export(), &metadata.output_dir)?;
    report::save_bucket_report(log.export(), &metadata.output_dir, 60.0)?;

    tracing::info!(
        "Session {} complete: {} frames processed, {} vehicles counted",
        metadata.run_id,
        summary.frames_processed,
        summary.vehicle_count
    );

    Ok(())
}
