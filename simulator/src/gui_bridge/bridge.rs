use crate::generator::drill::{build_drill_scenario, GeneratorConfig};
use crate::gui_bridge::model::VisualizationModel;
use crate::scenario::config::ScenarioConfig;
use crate::scenario::runner::Runner;
use anyhow::Result;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Boundary to the external plotting UI: serves the latest run as JSON and
/// accepts debounced scenario changes for recomputation.
pub struct GuiBridge {
    state: Arc<RwLock<VisualizationModel>>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(VisualizationModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("simulation")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<VisualizationModel>>| {
                warp::reply::json(&*state.read().unwrap())
            });

        let scenario_route = warp::path("scenario")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |scenario: ScenarioConfig,
                 state: Arc<RwLock<VisualizationModel>>,
                 runner: Arc<Runner>| async move {
                    match runner.execute_scenario(&scenario) {
                        Ok(run) => {
                            let model = VisualizationModel::from_run(&run, &scenario);
                            let samples = model.spectrogram.len();
                            let mut guard = state.write().unwrap();
                            *guard = model;
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "samples": samples,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("scenario error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let drill_route = warp::path("drill")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |config: GeneratorConfig,
                 state: Arc<RwLock<VisualizationModel>>,
                 runner: Arc<Runner>| async move {
                    let scenario = build_drill_scenario(&config);
                    match runner.execute_scenario(&scenario) {
                        Ok(run) => {
                            let model = VisualizationModel::from_run(&run, &scenario);
                            let mut guard = state.write().unwrap();
                            *guard = model;
                            if let Some(name) = config.scenario.as_ref() {
                                println!("[GUI] Drill {} -> seed {}", name, config.seed);
                            }
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "seed": config.seed,
                                    "description": config.description.clone().unwrap_or_default()
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("drill error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(scenario_route).or(drill_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &VisualizationModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[GUI] path points: {}, spectrogram samples: {}",
            guard.sensor_path.len(),
            guard.spectrogram.len()
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::config::ScenarioConfig;
    use crate::scenario::runner::Runner;
    use std::sync::Arc;

    #[test]
    fn gui_bridge_updates_state() {
        let cfg = ScenarioConfig {
            duration: 60.0,
            time_step: 10.0,
            ..Default::default()
        };
        let runner = Arc::new(Runner::new(cfg.clone()));
        let gui = GuiBridge::new(runner.clone());
        let run = runner.execute().unwrap();
        let model = VisualizationModel::from_run(&run, &cfg);
        gui.publish(&model).unwrap();
        let snapshot = gui.snapshot();
        assert_eq!(snapshot.spectrogram.len(), 7);
        assert_eq!(snapshot.sensor_path.len(), 7);
        assert!(snapshot.approach.is_some());
    }
}
