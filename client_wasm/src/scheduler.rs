//! Frame timing and the animation-frame loop

use crate::render::draw_frame;
use crate::surface::Surface;
use game_core::{RunSummary, Session};

/// Converts animation-frame timestamps into clamped simulation deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Seconds since the previous tick, clamped to `[0, max_dt]`.
    /// The first tick after a reset yields 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let last = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        let dt = ((now_ms - last) / 1000.0) as f32;
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_dt)
    }

    /// Forget the previous timestamp, e.g. after the loop was stopped
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// One scheduled frame: advance the session, then draw it
pub fn run_frame(
    session: &mut Session,
    clock: &mut FrameClock,
    now_ms: f64,
    surface: &mut impl Surface,
    high_score: u32,
) -> Option<RunSummary> {
    let dt = clock.tick(now_ms);
    let summary = session.update(dt);
    draw_frame(surface, session, high_score);
    summary
}

#[cfg(target_arch = "wasm32")]
pub use browser::AnimationLoop;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    type FrameCallback = Closure<dyn FnMut(f64)>;
    type SharedCallback = Rc<RefCell<Option<FrameCallback>>>;

    /// A `requestAnimationFrame` loop that keeps rescheduling itself until stopped
    pub struct AnimationLoop {
        running: Rc<Cell<bool>>,
        frame_id: Rc<Cell<Option<i32>>>,
        callback: SharedCallback,
    }

    impl AnimationLoop {
        pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
            let running = Rc::new(Cell::new(true));
            let frame_id = Rc::new(Cell::new(None));
            let callback: SharedCallback = Rc::new(RefCell::new(None));

            let loop_running = running.clone();
            let loop_frame_id = frame_id.clone();
            let loop_callback = callback.clone();
            *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                if !loop_running.get() {
                    return;
                }
                on_frame(timestamp);
                match request_frame(&loop_callback) {
                    Ok(id) => loop_frame_id.set(Some(id)),
                    Err(err) => {
                        console_warn!("Animation loop halted: {:?}", err);
                        loop_running.set(false);
                    }
                }
            }));

            frame_id.set(Some(request_frame(&callback)?));
            Ok(Self {
                running,
                frame_id,
                callback,
            })
        }

        /// Cancel the pending frame and release the callback
        pub fn stop(&self) {
            self.running.set(false);
            if let Some(id) = self.frame_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
            self.callback.borrow_mut().take();
        }
    }

    impl Drop for AnimationLoop {
        fn drop(&mut self) {
            self.stop();
        }
    }

    fn request_frame(callback: &SharedCallback) -> Result<i32, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame callback released"))?;
        window.request_animation_frame(callback.as_ref().unchecked_ref())
    }
}
