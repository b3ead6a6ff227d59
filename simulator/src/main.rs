use anyhow::Context;
use clap::Parser;
use generator::presets::{preset, PRESET_NAMES};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::VisualizationModel;
use scenario::config::ScenarioConfig;
use scenario::runner::Runner;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod generator;
mod gui_bridge;
mod scenario;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the sonar trainer simulation engine")]
struct Args {
    /// Run a single offline simulation and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a scenario config from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Use a named training preset instead of the parameter flags
    #[arg(long)]
    preset: Option<String>,
    #[arg(long, default_value_t = 10.0)]
    sensor_speed: f64,
    #[arg(long, default_value_t = 0.0)]
    sensor_course: f64,
    #[arg(long, default_value_t = 15.0)]
    source_speed: f64,
    #[arg(long, default_value_t = 325.0)]
    source_course: f64,
    #[arg(long, default_value_t = 12.0)]
    source_range_km: f64,
    #[arg(long, default_value_t = 45.0)]
    source_bearing: f64,
    #[arg(long, default_value_t = 400.0)]
    source_frequency: f64,
    #[arg(long, default_value_t = 3600.0)]
    duration: f64,
    #[arg(long, default_value_t = 1.0)]
    time_step: f64,
    /// Keep the GUI bridge alive for incoming scenario payloads
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario_config = if let Some(path) = args.scenario {
        ScenarioConfig::load(path)?
    } else if let Some(name) = args.preset.as_deref() {
        preset(name).with_context(|| {
            format!("unknown preset '{name}', expected one of: {}", PRESET_NAMES.join(", "))
        })?
    } else {
        ScenarioConfig::from_args(
            args.sensor_speed,
            args.sensor_course,
            args.source_speed,
            args.source_course,
            args.source_range_km,
            args.source_bearing,
            args.source_frequency,
            args.duration,
            args.time_step,
        )
    };

    let runner = Runner::new(scenario_config.clone());
    let gui_bridge = GuiBridge::new(Arc::new(runner.clone()));

    if args.offline {
        let run = runner.execute()?;

        let received_start = run.spectrogram.first().map(|s| s.frequency).unwrap_or(0.0);
        let received_end = run.spectrogram.last().map(|s| s.frequency).unwrap_or(0.0);
        println!(
            "Offline run -> {} samples, received {:.2} Hz at start / {:.2} Hz at end, CPA {:.0} m at t={:.0}s",
            run.spectrogram.len(),
            received_start,
            received_end,
            run.approach.range_m,
            run.approach.time_s
        );

        let model = VisualizationModel::from_run(&run, &scenario_config);
        gui_bridge.publish(&model)?;
        gui_bridge.publish_status("Offline simulation results ready.");

        let (runs, failures) = runner.metrics().snapshot();
        let report = format!(
            "samples={} f_start={:.3} f_end={:.3} cpa_m={:.1} tcpa_s={:.1} runs={} failures={}\n",
            run.spectrogram.len(),
            received_start,
            received_end,
            run.approach.range_m,
            run.approach.time_s,
            runs,
            failures
        );
        let report_path = PathBuf::from("tools/data/offline_simulation.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
