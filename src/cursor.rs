use crate::clock::FrameLoop;
use crate::constants::*;
use crate::dom::{self, js_err};
use crate::events::{Listener, PointerReader};
use crate::trail::{self, MarkerState, Trail};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const MARKER_CSS: &str = "position: fixed; top: 0; left: 0; width: 12px; height: 12px; \
     background: #f472b6; border-radius: 50%; pointer-events: none; z-index: 2147483647; \
     transform: translate(-50%, -50%); transition: transform 0.15s ease-out; \
     box-shadow: 0 0 15px rgba(244, 114, 182, 0.5); will-change: transform; \
     mix-blend-mode: difference;";

const GLOW_CSS: &str = "position: fixed; top: 0; left: 0; width: 40px; height: 40px; \
     background: radial-gradient(circle, rgba(244, 114, 182, 0.1) 0%, transparent 70%); \
     border-radius: 50%; pointer-events: none; z-index: 2147483646; \
     transform: translate(-50%, -50%); transition: transform 0.2s ease-out; \
     will-change: transform;";

const BUBBLE_CSS: &str = "position: fixed; width: 6px; height: 6px; \
     background: rgba(244, 114, 182, 0.6); border-radius: 50%; pointer-events: none; \
     transform: translate(-50%, -50%) scale(0); opacity: 0; will-change: transform, opacity;";

struct Parts {
    marker: web::HtmlElement,
    glow: web::HtmlElement,
    bubbles: Vec<web::HtmlElement>,
}

impl Parts {
    fn apply_marker(&self, state: &MarkerState) {
        dom::set_style(
            &self.marker,
            "transform",
            &format!("translate(-50%, -50%) scale({})", state.scale()),
        );
        dom::set_style(&self.marker, "background", state.color());
        dom::set_style(
            &self.glow,
            "transform",
            &format!("translate(-50%, -50%) scale({})", state.glow_scale()),
        );
        dom::set_style(&self.marker, "opacity", state.opacity());
        dom::set_style(&self.glow, "opacity", state.opacity());
    }

    fn launch_bubble(&self, slot: usize, pos: Vec2) {
        let Some(el) = self.bubbles.get(slot) else {
            return;
        };
        dom::place(el, pos);
        dom::set_style(el, "transform", "translate(-50%, -50%) scale(0)");
        dom::set_style(el, "opacity", "1");
        dom::set_style(el, "animation", BUBBLE_ANIMATION);
    }

    fn reset_bubbles(&self, released: &[usize]) {
        for el in released.iter().filter_map(|&i| self.bubbles.get(i)) {
            dom::set_style(el, "opacity", "0");
            dom::set_style(el, "animation", "none");
        }
    }

    fn nodes(&self) -> impl Iterator<Item = &web::HtmlElement> {
        [&self.glow, &self.marker].into_iter().chain(self.bubbles.iter())
    }
}

/// Pointer-following marker and glow with a pooled bubble trail.
pub struct CursorTrail {
    parts: Rc<Parts>,
    frame: Rc<FrameLoop>,
    _listeners: Vec<Listener>,
}

impl CursorTrail {
    /// Returns `Ok(None)` without touching the DOM on narrow or touch devices
    /// and on pages without a `<body>`.
    pub fn install(
        document: &web::Document,
        pointer: PointerReader,
    ) -> anyhow::Result<Option<Self>> {
        let Some(window) = web::window() else {
            return Ok(None);
        };
        let width = dom::viewport_size(&window).x as f64;
        let touch = dom::touch_capable(&window);
        if !trail::cursor_enabled(width, touch) {
            log::info!("[cursor] native cursor kept (width={}, touch={})", width, touch);
            return Ok(None);
        }
        let Some(body) = document.body() else {
            log::debug!("[cursor] no <body>, skipping");
            return Ok(None);
        };

        dom::remove_all(document, CURSOR_LEFTOVER_SELECTOR);

        let glow: web::HtmlElement = dom::create_element(document, "div")?;
        glow.set_class_name(CURSOR_GLOW_CLASS);
        glow.style().set_css_text(GLOW_CSS);
        let marker: web::HtmlElement = dom::create_element(document, "div")?;
        marker.set_class_name(CURSOR_CLASS);
        marker.style().set_css_text(MARKER_CSS);
        body.append_child(&glow).map_err(js_err)?;
        body.append_child(&marker).map_err(js_err)?;

        let mut bubbles = Vec::with_capacity(BUBBLE_CAPACITY);
        for i in 0..BUBBLE_CAPACITY {
            let bubble: web::HtmlElement = dom::create_element(document, "div")?;
            bubble.set_class_name(&format!("{} {}-{}", BUBBLE_CLASS, BUBBLE_CLASS, i));
            bubble.style().set_css_text(BUBBLE_CSS);
            dom::set_style(&bubble, "z-index", &(2147483640 - i as i64).to_string());
            body.append_child(&bubble).map_err(js_err)?;
            bubbles.push(bubble);
        }

        let parts = Rc::new(Parts {
            marker,
            glow,
            bubbles,
        });
        let trail = Rc::new(RefCell::new(Trail::default()));

        // Direct positioning every frame; the glow's lag comes from its CSS transition.
        let frame = {
            let parts = parts.clone();
            let trail = trail.clone();
            let pointer = pointer.clone();
            Rc::new(FrameLoop::new(move || {
                let pos = pointer.get();
                dom::place(&parts.marker, pos);
                dom::place(&parts.glow, pos);
                let released = trail.borrow_mut().on_frame(Instant::now());
                parts.reset_bubbles(&released);
            }))
        };

        let mut listeners = Vec::new();

        {
            let parts = parts.clone();
            let trail = trail.clone();
            let frame = frame.clone();
            listeners.push(Listener::new(document, "pointermove", move |_: web::PointerEvent| {
                let outcome = trail.borrow_mut().on_move(pointer.get(), Instant::now());
                parts.reset_bubbles(&outcome.released);
                if let Some((slot, pos)) = outcome.spawned {
                    parts.launch_bubble(slot, pos);
                }
                if !frame.is_running() {
                    frame.start();
                }
            })?);
        }

        for (kind, pressed) in [("pointerdown", true), ("pointerup", false)] {
            let parts = parts.clone();
            let trail = trail.clone();
            listeners.push(Listener::new(document, kind, move |_: web::PointerEvent| {
                let mut trail = trail.borrow_mut();
                trail.marker.pressed = pressed;
                parts.apply_marker(&trail.marker);
            })?);
        }

        for (kind, visible) in [("mouseleave", false), ("mouseenter", true)] {
            let parts = parts.clone();
            let trail = trail.clone();
            let frame = frame.clone();
            listeners.push(Listener::new(document, kind, move |_: web::MouseEvent| {
                let mut trail = trail.borrow_mut();
                trail.marker.visible = visible;
                parts.apply_marker(&trail.marker);
                if visible {
                    frame.start();
                } else {
                    frame.stop();
                }
            })?);
        }

        let interactive: Vec<web::Element> = match document.document_element() {
            Some(root) => dom::query_all(&root, INTERACTIVE_SELECTOR),
            None => Vec::new(),
        };
        for el in &interactive {
            for (kind, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                let parts = parts.clone();
                let trail = trail.clone();
                listeners.push(Listener::new(el, kind, move |_: web::MouseEvent| {
                    let mut trail = trail.borrow_mut();
                    trail.marker.hovering = hovering;
                    parts.apply_marker(&trail.marker);
                })?);
            }
        }
        log::info!(
            "[cursor] installed with {} bubbles, {} interactive elements",
            BUBBLE_CAPACITY,
            interactive.len()
        );

        Ok(Some(Self {
            parts,
            frame,
            _listeners: listeners,
        }))
    }
}

impl Drop for CursorTrail {
    fn drop(&mut self) {
        self.frame.stop();
        for el in self.parts.nodes() {
            el.remove();
        }
    }
}
