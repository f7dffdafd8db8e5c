//! Decorative cursor dot that trails the pointer.

use dioxus::prelude::*;

/// Fixed-position dot following the mouse. Listens on the window so the dot
/// tracks across every layer, including fixed overlays.
#[component]
pub fn CustomCursor() -> Element {
    let pos = use_signal(|| (0.0_f64, 0.0_f64));

    #[cfg(target_arch = "wasm32")]
    {
        let mut pos = pos;
        use_effect(move || {
            use wasm_bindgen::closure::Closure;
            use wasm_bindgen::JsCast;

            let handler = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
                move |event: web_sys::MouseEvent| {
                    pos.set((event.client_x() as f64, event.client_y() as f64));
                },
            );
            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    "mousemove",
                    handler.as_ref().unchecked_ref(),
                );
            }
            // Lives for the rest of the page; the cursor never unmounts
            // once the intro gate opens.
            handler.forget();
        });
    }

    let (x, y) = pos();

    rsx! {
        div {
            class: "custom-cursor",
            style: "transform: translate({x}px, {y}px);",
        }
    }
}
