//! Browser environment queries for the desktop shell.
//!
//! The shell reads the host viewport at interaction time rather than caching
//! it, so resizing the browser between (or during) drags changes the clamp
//! bounds live. Off-wasm builds get fixed fallbacks so reducer tests and
//! native tooling never touch the DOM.

use crate::model::Viewport;

/// Returns the current host viewport extent.
pub fn viewport_size() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return Viewport {
                width: width.max(320),
                height: height.max(240),
            };
        }
    }

    Viewport {
        width: 1024,
        height: 768,
    }
}

#[cfg(target_arch = "wasm32")]
/// Routes subsequent pointer events for this pointer to the pressed element,
/// so fast drags do not drop events when the pointer outruns the window.
pub fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
/// No-op off-wasm.
pub fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}
