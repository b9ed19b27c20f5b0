//! JavaScript entry point

use crate::app::App;
use crate::config::ClientConfig;
use crate::fetch_api::FetchApi;
use crate::input::{command_for_key, get_code_from_event, should_prevent_default, Command};
use crate::scheduler::AnimationLoop;
use crate::score_sync::ScoreSync;
use game_core::{Config, GameRng, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent,
    PointerEvent, Window,
};

type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;
type PointerListener = Closure<dyn FnMut(PointerEvent)>;

/// A running game bound to one canvas. Call `stop` before discarding it.
#[wasm_bindgen]
pub struct GameHandle {
    app: Rc<RefCell<App>>,
    sync: ScoreSync<FetchApi>,
    frames: Option<AnimationLoop>,
    window: Window,
    canvas: HtmlCanvasElement,
    on_key: Option<KeyListener>,
    on_pointer: Option<PointerListener>,
}

#[wasm_bindgen]
impl GameHandle {
    /// Start a game on `canvas`. `api_base` defaults to the page's origin.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, api_base: Option<String>) -> Result<GameHandle, JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let config = Config::default();
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let session = Session::new(config, GameRng::from_entropy()).map_err(|e| JsValue::from_str(&e))?;
        let client_config = ClientConfig::new(api_base.unwrap_or_default());
        console_log!("Starting game, score API at {}", client_config.endpoint(proto::HIGH_SCORE_PATH));

        let sync = ScoreSync::new(FetchApi::new(client_config));
        sync.spawn_fetch();

        let mut handle = GameHandle {
            app: Rc::new(RefCell::new(App::new(session))),
            sync,
            frames: None,
            window,
            canvas,
            on_key: None,
            on_pointer: None,
        };
        handle.attach_input()?;
        handle.start_frames(ctx)?;
        Ok(handle)
    }

    /// Cancel the frame loop and detach input listeners
    pub fn stop(&mut self) {
        let was_running = self.frames.is_some();
        if let Some(frames) = self.frames.take() {
            frames.stop();
        }
        if let Some(on_key) = self.on_key.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
        }
        if let Some(on_pointer) = self.on_pointer.take() {
            let _ = self
                .canvas
                .remove_event_listener_with_callback("pointerdown", on_pointer.as_ref().unchecked_ref());
        }
        self.app.borrow_mut().stop();
        if was_running {
            console_log!("Game stopped");
        }
    }

    pub fn phase(&self) -> String {
        self.app.borrow().session().phase().as_str().to_string()
    }

    pub fn score(&self) -> u32 {
        self.app.borrow().session().score()
    }

    #[wasm_bindgen(js_name = highScore)]
    pub fn high_score(&self) -> u32 {
        self.sync.mirror().high_score
    }

    #[wasm_bindgen(js_name = serverStatus)]
    pub fn server_status(&self) -> String {
        self.sync.mirror().status.message().to_string()
    }
}

impl GameHandle {
    fn attach_input(&mut self) -> Result<(), JsValue> {
        let app = self.app.clone();
        let on_key = KeyListener::new(move |event: KeyboardEvent| {
            let code = get_code_from_event(&event);
            let Some(command) = command_for_key(&code) else {
                return;
            };
            if should_prevent_default(&code) {
                event.prevent_default();
            }
            app.borrow_mut().handle_command(command);
        });
        // Non-passive so Space can be kept from scrolling the page
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        self.window.add_event_listener_with_callback_and_add_event_listener_options(
            "keydown",
            on_key.as_ref().unchecked_ref(),
            &options,
        )?;
        self.on_key = Some(on_key);

        let app = self.app.clone();
        let on_pointer = PointerListener::new(move |_event: PointerEvent| {
            app.borrow_mut().handle_command(Command::Flap);
        });
        self.canvas
            .add_event_listener_with_callback("pointerdown", on_pointer.as_ref().unchecked_ref())?;
        self.on_pointer = Some(on_pointer);
        Ok(())
    }

    fn start_frames(&mut self, mut ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
        let app = self.app.clone();
        let sync = self.sync.clone();
        self.frames = Some(AnimationLoop::start(move |timestamp| {
            let high_score = sync.mirror().high_score;
            let summary = app.borrow_mut().frame(timestamp, &mut ctx, high_score);
            if let Some(summary) = summary {
                sync.spawn_report(summary.score);
            }
        })?);
        Ok(())
    }
}

// Listeners must not outlive their closures, whether JS calls `stop`,
// only `free`, or construction failed halfway.
impl Drop for GameHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
