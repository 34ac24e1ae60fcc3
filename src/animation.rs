// requestAnimationFrame driven loop with an explicit cancellation token.
//
// The frame closure keeps a handle to itself so it can re-request the next
// frame; `stop` cancels the pending frame and drops the closure, breaking
// that cycle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

// One loop iteration. Returns whether the next frame should be requested.
pub fn run_tick<F: FnMut()>(token: &CancelToken, on_frame: &mut F) -> bool {
    if token.is_cancelled() {
        return false;
    }
    on_frame();
    !token.is_cancelled()
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct AnimationLoop {
    window: Window,
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    pub fn start<F>(window: &Window, mut on_frame: F) -> Result<AnimationLoop, JsValue>
    where
        F: FnMut() + 'static,
    {
        let token = CancelToken::new();
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let loop_window = window.clone();
        let loop_token = token.clone();
        let loop_pending = pending.clone();
        let loop_callback = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            loop_pending.set(None);
            if !run_tick(&loop_token, &mut on_frame) {
                return;
            }
            if let Err(err) = schedule(&loop_window, &loop_callback, &loop_pending) {
                log::error!("failed to request animation frame: {:?}", err);
            }
        }) as Box<dyn FnMut()>));

        schedule(window, &callback, &pending)?;

        Ok(AnimationLoop {
            window: window.clone(),
            token,
            pending,
            callback,
        })
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn stop(&self) {
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("failed to cancel animation frame {}: {:?}", id, err);
            }
        }
        self.callback.borrow_mut().take();
    }
}

fn schedule(
    window: &Window,
    callback: &RefCell<Option<Closure<dyn FnMut()>>>,
    pending: &Cell<Option<i32>>,
) -> Result<(), JsValue> {
    let callback = callback.borrow();
    let closure = callback.as_ref().ok_or("animation loop was stopped")?;
    let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    pending.set(Some(id));
    Ok(())
}
