// Console logging. Imported JS functions panic when called off wasm, so native
// builds (unit tests) drop messages.

#[cfg(target_arch = "wasm32")]
pub(crate) fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn clog(_msg: &str) {}

#[cfg(target_arch = "wasm32")]
pub(crate) fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn cwarn(_msg: &str) {}
