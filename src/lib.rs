//! Flap-style obstacle dodger with a spoken word/color challenge.
//!
//! `core`, `render`, `input` and `frame` are platform-neutral and tested on the
//! host; the DOM, canvas and speech glue only builds for wasm32.

pub mod constants;
pub mod core;
pub mod frame;
pub mod input;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod speech;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::canvas::CanvasSurface;
    use crate::core::{GameConfig, GameState};
    use crate::frame::{self, FrameContext};
    use crate::input::InputState;
    use crate::{dom, events, overlay, speech};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;

    const CANVAS_ID: &str = "gameCanvas";
    const START_BUTTON_ID: &str = "startButton";

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("chroma-flap starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let (window, document) = dom::window_document()?;
        let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
        let surface = CanvasSurface::from_canvas(&canvas)?;

        let config = GameConfig::default().with_field(canvas.width() as f32, canvas.height() as f32);
        log::info!("[init] field {}x{}", config.field.x, config.field.y);

        let input = Rc::new(RefCell::new(InputState::default()));
        events::keyboard::wire_ascend_keys(&document, input.clone());
        events::touch::wire_touch(&canvas, input.clone());

        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
            GameState::from_entropy(config),
            speech::select(&window),
            input,
            surface,
        )));

        // The loop stays inert until the start button is pressed, once.
        static STARTED: AtomicBool = AtomicBool::new(false);
        let doc = document.clone();
        dom::add_click_listener(&document, START_BUTTON_ID, move || {
            if STARTED.swap(true, Ordering::SeqCst) {
                return;
            }
            overlay::hide(&doc);
            log::info!("[init] game started");
            frame::start_loop(frame_ctx.clone());
        })?;
        Ok(())
    }
}
