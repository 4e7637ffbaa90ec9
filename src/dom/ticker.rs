use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

/// Browser interval driving game ticks.
///
/// The callback closure lives as long as the `Ticker`; arming and cancelling
/// only create or clear the interval handle. A tick can therefore cancel its
/// own interval without freeing the closure that is executing.
pub(crate) struct Ticker {
    callback: Closure<dyn FnMut()>,
    period_ms: i32,
    handle: Option<i32>,
}

impl Ticker {
    pub(crate) fn new(period_ms: u32, on_tick: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>),
            period_ms: i32::try_from(period_ms).unwrap_or(i32::MAX),
            handle: None,
        }
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    pub(crate) fn arm(&mut self) -> Result<(), JsValue> {
        if self.handle.is_some() {
            return Ok(());
        }
        let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            self.period_ms,
        )?;
        crate::log::clog(&format!("tick timer armed ({} ms)", self.period_ms));
        self.handle = Some(id);
        Ok(())
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = window() {
                w.clear_interval_with_handle(id);
            }
            crate::log::clog("tick timer cleared");
        }
    }

    /// Arm or cancel so the timer runs exactly when `wanted`.
    pub(crate) fn sync(&mut self, wanted: bool) -> Result<(), JsValue> {
        if wanted {
            self.arm()
        } else {
            self.cancel();
            Ok(())
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
