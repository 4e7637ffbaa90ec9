//! Color Change Game core crate.
//!
//! A color is highlighted every tick, players click matching color buttons, and
//! the first three colors to collect three clicks take ranked prizes. The game
//! logic (`game`, `palette`, `view`) is plain Rust and runs natively; the `dom`
//! layer wires it to the browser and is driven from JS through the exports below.

use wasm_bindgen::prelude::*;

pub mod game;
pub mod palette;
pub mod rng;
pub mod view;

mod dom;
mod log;

pub use game::{GameConfig, GameController, Intent, Phase, prize_label};
pub use view::GameView;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Render the game into `#ccg-root` with the default one second tick.
#[wasm_bindgen]
pub fn mount_game() -> Result<(), JsValue> {
    dom::mount(GameConfig::default())
}

#[wasm_bindgen]
pub fn mount_game_with_interval(tick_interval_ms: u32) -> Result<(), JsValue> {
    dom::mount(GameConfig::default().with_tick_interval(tick_interval_ms))
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    dom::dispatch(Intent::Start)
}

#[wasm_bindgen]
pub fn stop_game() -> Result<(), JsValue> {
    dom::dispatch(Intent::Stop)
}

/// Same as pressing the color's button. Unknown names are ignored.
#[wasm_bindgen]
pub fn click_color(name: &str) -> Result<(), JsValue> {
    match dom::parse_action("click", Some(name)) {
        Some(intent) => dom::dispatch(intent),
        None => Ok(()),
    }
}

/// Whether the tick interval is currently armed.
#[wasm_bindgen]
pub fn is_ticking() -> bool {
    dom::ticking()
}

/// View of the mounted game, `None` before `mount_game`.
pub fn current_view() -> Option<GameView> {
    dom::snapshot()
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn snapshot_json() -> Result<String, JsValue> {
    let view = dom::snapshot().ok_or_else(|| JsValue::from_str("game is not mounted"))?;
    view.to_json().map_err(|e| JsValue::from_str(&e.to_string()))
}
