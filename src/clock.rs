use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A per-component `requestAnimationFrame` registration.
///
/// The callback runs at most once per display refresh while the loop is
/// running. `start` is idempotent, `stop` cancels the pending frame, and the
/// callback itself may call either. Dropping the loop stops it.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

struct Inner {
    callback: RefCell<Box<dyn FnMut()>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<Option<i32>>,
    running: Cell<bool>,
}

impl FrameLoop {
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(Inner {
            callback: RefCell::new(Box::new(callback)),
            tick: RefCell::new(None),
            pending: Cell::new(None),
            running: Cell::new(false),
        });
        // weak: the closure lives inside `inner`
        let weak: Weak<Inner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame();
            }
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    pub fn start(&self) {
        self.inner.running.set(true);
        self.inner.request();
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Inner {
    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn on_frame(&self) {
        self.pending.set(None);
        if !self.running.get() {
            return;
        }
        if let Ok(mut callback) = self.callback.try_borrow_mut() {
            let f: &mut dyn FnMut() = &mut **callback;
            f();
        }
        if self.running.get() {
            self.request();
        }
    }
}
