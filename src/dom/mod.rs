//! Browser glue: mounts the game into the page, routes clicks and timer ticks
//! into the controller, and re-renders after every state change.
//!
//! All state sits in one thread-local `App`. Every event (click, tick, JS call)
//! goes through `dispatch`, which borrows the app for the full duration of the
//! update, so events never interleave.

mod ticker;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, window};

use crate::game::{GameConfig, GameController, Intent};
use crate::log::{clog, cwarn};
use crate::palette;
use crate::view::{GameView, render_html};
use ticker::Ticker;

pub(crate) const ROOT_ID: &str = "ccg-root";
const BOUND_ATTR: &str = "data-ccg-bound";

struct App {
    controller: GameController,
    ticker: Ticker,
    root: Element,
}

impl App {
    fn handle(&mut self, intent: Intent) -> Result<(), JsValue> {
        if intent == Intent::Start {
            // a fresh round gets a full first period
            self.ticker.cancel();
        }
        let changed = self.controller.apply(intent);
        self.ticker.sync(self.controller.wants_ticks())?;
        if changed {
            self.render();
        }
        Ok(())
    }

    fn render(&self) {
        let view = GameView::project(&self.controller);
        self.root.set_inner_html(&render_html(&view));
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Build (or rebuild) the game inside `#ccg-root`, creating the element if the
/// page does not provide one. Remounting drops the previous game and its timer.
pub(crate) fn mount(config: GameConfig) -> Result<(), JsValue> {
    let config = config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let root = match doc.get_element_by_id(ROOT_ID) {
        Some(el) => el,
        None => {
            let el = doc.create_element("div")?;
            el.set_id(ROOT_ID);
            doc.body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&el)?;
            el
        }
    };
    bind_clicks(&root)?;

    let ticker = Ticker::new(config.tick_interval_ms, || {
        if let Err(e) = dispatch(Intent::Tick) {
            cwarn(&format!("tick failed: {e:?}"));
        }
    });
    let app = App {
        controller: GameController::new(config),
        ticker,
        root,
    };
    app.render();
    clog(&format!("game mounted, tick every {} ms", config.tick_interval_ms));

    let previous = APP.with(|cell| cell.replace(Some(app)));
    drop(previous);
    Ok(())
}

/// Feed one intent through the mounted game.
pub(crate) fn dispatch(intent: Intent) -> Result<(), JsValue> {
    APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let app = slot
            .as_mut()
            .ok_or_else(|| JsValue::from_str("game is not mounted"))?;
        app.handle(intent)
    })
}

/// Current view of the mounted game, if any.
pub(crate) fn snapshot() -> Option<GameView> {
    APP.with(|cell| cell.borrow().as_ref().map(|app| GameView::project(&app.controller)))
}

/// Whether the mounted game currently holds an armed interval.
pub(crate) fn ticking() -> bool {
    APP.with(|cell| cell.borrow().as_ref().is_some_and(|app| app.ticker.is_armed()))
}

// One delegated listener on the root survives every innerHTML re-render.
fn bind_clicks(root: &Element) -> Result<(), JsValue> {
    if root.has_attribute(BOUND_ATTR) {
        return Ok(());
    }
    let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        let Some(intent) = intent_for_event(&evt) else {
            return;
        };
        if let Err(e) = dispatch(intent) {
            cwarn(&format!("click failed: {e:?}"));
        }
    }) as Box<dyn FnMut(_)>);
    root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    root.set_attribute(BOUND_ATTR, "1")?;
    Ok(())
}

fn intent_for_event(evt: &web_sys::Event) -> Option<Intent> {
    let target: Element = evt.target()?.dyn_into().ok()?;
    let el = target.closest("[data-action]").ok()??;
    if el.has_attribute("disabled") {
        return None;
    }
    let action = el.get_attribute("data-action")?;
    parse_action(&action, el.get_attribute("data-color").as_deref())
}

/// Map a `data-action` / `data-color` pair to an intent.
pub(crate) fn parse_action(action: &str, color: Option<&str>) -> Option<Intent> {
    match action {
        "start" => Some(Intent::Start),
        "stop" => Some(Intent::Stop),
        "click" => match color.and_then(palette::find) {
            Some(c) => Some(Intent::Click(c)),
            None => {
                cwarn(&format!("click on unknown color {color:?}"));
                None
            }
        },
        _ => None,
    }
}
