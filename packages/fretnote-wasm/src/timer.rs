//! Cancellable `setTimeout`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A scheduled callback, cleared when dropped
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F: FnMut() + 'static>(delay_ms: u32, callback: F) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window to schedule on"))?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}
