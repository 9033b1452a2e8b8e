mod canvas;
mod cards;
mod runner;
mod storage;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use runner::AppRunner;

thread_local! {
    static RUNNER: RefCell<Option<AppRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut AppRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("App not initialized. Call app_init() first.");
        f(runner)
    })
}

/// Set up logging and build the simulation against the given canvas.
#[wasm_bindgen]
pub fn app_init(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = AppRunner::new(canvas_id)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("plinko: initialized");
    Ok(())
}

/// Per-display-refresh tick; `dt` is elapsed seconds since the last call.
#[wasm_bindgen]
pub fn app_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// The "drop" button: start a new division from the configured names.
#[wasm_bindgen]
pub fn app_drop() {
    with_runner(|r| r.start_division());
}

/// The "reset" button: clear the board and re-enable the drop control.
#[wasm_bindgen]
pub fn app_reset() {
    with_runner(|r| r.reset());
}

#[wasm_bindgen]
pub fn app_is_finalized() -> bool {
    with_runner(|r| r.is_finalized())
}

/// Finalized groups as a JSON object (`{"groups": [[...], ...]}`), empty
/// string while no division is complete.
#[wasm_bindgen]
pub fn app_groups_json() -> String {
    with_runner(|r| r.groups_json())
}
