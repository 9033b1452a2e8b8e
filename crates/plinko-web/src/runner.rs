use plinko_engine::{
    DivisionEvent, DivisionState, FixedTimestep, SimConfig, Simulation,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::canvas::CanvasPainter;
use crate::{cards, storage};

/// Wires the simulation to the page: fixed-timestep stepping from the
/// requestAnimationFrame callback, canvas painting, config from
/// localStorage, and the results cards on finalize.
pub struct AppRunner {
    sim: Simulation,
    timestep: FixedTimestep,
    painter: CanvasPainter,
}

impl AppRunner {
    pub fn new(canvas_id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()?;

        let mut config = SimConfig {
            world_width: canvas.width() as f32,
            world_height: canvas.height() as f32,
            ..SimConfig::default()
        };
        if let Some(count) = storage::zone_count() {
            config.zone_count = count;
        }

        let timestep = FixedTimestep::new(config.fixed_dt);
        let sim = Simulation::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let painter = CanvasPainter::new(&canvas)?;

        Ok(Self {
            sim,
            timestep,
            painter,
        })
    }

    /// One display-refresh callback. `dt` is the elapsed time in seconds.
    pub fn tick(&mut self, dt: f32) {
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.sim.frame();
        }

        for event in self.sim.drain_events() {
            if event == DivisionEvent::Finalized {
                if let Some(report) = self.sim.results() {
                    cards::render_groups(report);
                }
                cards::show_results_panel(true);
                cards::set_drop_enabled(false);
            }
        }

        if let Err(err) = self.painter.paint(&self.sim.snapshot()) {
            log::warn!("paint failed: {err:?}");
        }
    }

    /// The "drop" trigger: start a new division from the configured names.
    pub fn start_division(&mut self) {
        let names = storage::names();
        self.sim.start_division(&names);
        self.timestep.reset();
    }

    /// The "reset" trigger: clear the board and re-arm the drop control.
    pub fn reset(&mut self) {
        self.sim.reset();
        cards::show_results_panel(false);
        cards::set_drop_enabled(true);
    }

    pub fn is_finalized(&self) -> bool {
        self.sim.state() == DivisionState::Finalized
    }

    /// Finalized groups as JSON, empty string until a division completes.
    pub fn groups_json(&self) -> String {
        self.sim
            .results()
            .and_then(|report| serde_json::to_string(report).ok())
            .unwrap_or_default()
    }
}
