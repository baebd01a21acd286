use crate::events::Listener;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Owner of the page-wide pointer position (viewport pixels).
///
/// Install it before any component that reads it: listeners on the same
/// target fire in registration order, so readers see the current event's
/// coordinates from their own `pointermove` handlers.
pub struct PointerTracker {
    pos: Rc<Cell<Vec2>>,
    _listener: Listener,
}

/// Read-only view of the tracked pointer position.
#[derive(Clone)]
pub struct PointerReader {
    pos: Rc<Cell<Vec2>>,
}

impl PointerReader {
    #[inline]
    pub fn get(&self) -> Vec2 {
        self.pos.get()
    }
}

impl PointerTracker {
    pub fn install(document: &web::Document) -> anyhow::Result<Self> {
        let pos = Rc::new(Cell::new(Vec2::ZERO));
        let pos_move = pos.clone();
        let listener = Listener::new(document, "pointermove", move |ev: web::PointerEvent| {
            pos_move.set(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        })?;
        Ok(Self {
            pos,
            _listener: listener,
        })
    }

    pub fn reader(&self) -> PointerReader {
        PointerReader {
            pos: self.pos.clone(),
        }
    }
}
