use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

/// Assumed width when there is no window to measure.
pub const FALLBACK_WIDTH: u32 = 1280;

pub fn current_width() -> u32 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Current `window.innerWidth`, updated on every resize.
#[hook]
pub fn use_viewport_width() -> u32 {
    let width = use_state(current_width);

    {
        let width = width.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let resize_callback = Closure::wrap(Box::new(move || {
                    width.set(current_width());
                }) as Box<dyn FnMut()>);

                if window
                    .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not listen for resize events, keeping initial width");
                }
                (window, resize_callback)
            });

            move || {
                if let Some((window, resize_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    *width
}
