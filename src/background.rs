use crate::backdrop::{self, ElementTransform, Group};
use crate::constants::BACKGROUND_ID;
use crate::dom;
use crate::events::{Listener, PointerReader};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Tracked {
    el: web::HtmlElement,
    group: Group,
    index: usize,
    transform: ElementTransform,
}

impl Tracked {
    fn write(&self) {
        dom::set_style(&self.el, "transform", &self.transform.css());
        if let Some(opacity) = self.transform.opacity() {
            dom::set_style(&self.el, "opacity", &format!("{:.3}", opacity));
        }
    }
}

/// Pointer- and scroll-driven transforms on the decorative elements under
/// `#interactiveBg`.
pub struct ReactiveBackground {
    elements: Rc<RefCell<Vec<Tracked>>>,
    _listeners: Vec<Listener>,
}

impl ReactiveBackground {
    pub fn install(
        document: &web::Document,
        pointer: PointerReader,
    ) -> anyhow::Result<Option<Self>> {
        let Some(window) = web::window() else {
            return Ok(None);
        };
        let Some(root) = document.get_element_by_id(BACKGROUND_ID) else {
            log::debug!("[background] #{} not found, skipping", BACKGROUND_ID);
            return Ok(None);
        };

        let mut elements = Vec::new();
        let mut counts = [0usize; 3];
        for (g, group) in Group::ALL.into_iter().enumerate() {
            let found: Vec<web::HtmlElement> = dom::query_all(&root, group.selector());
            counts[g] = found.len();
            elements.extend(found.into_iter().enumerate().map(|(index, el)| Tracked {
                el,
                group,
                index,
                transform: ElementTransform::default(),
            }));
        }
        log::info!(
            "[background] spheres={} shapes={} motes={}",
            counts[0],
            counts[1],
            counts[2]
        );
        let elements = Rc::new(RefCell::new(elements));

        let on_move = {
            let elements = elements.clone();
            let window = window.clone();
            Listener::new(document, "pointermove", move |_: web::PointerEvent| {
                let n = backdrop::normalize_pointer(pointer.get(), dom::viewport_size(&window));
                for t in elements.borrow_mut().iter_mut() {
                    t.transform.pointer = Some(backdrop::pointer_part(t.group, t.index, n));
                    t.write();
                }
            })?
        };

        let on_scroll = {
            let elements = elements.clone();
            let window_scroll = window.clone();
            let document = document.clone();
            Listener::new(&window, "scroll", move |_: web::Event| {
                let scroll_y = window_scroll.scroll_y().unwrap_or(0.0);
                let scroll_height = document
                    .document_element()
                    .map(|el| el.scroll_height() as f64)
                    .unwrap_or(0.0);
                let viewport_h = dom::viewport_size(&window_scroll).y as f64;
                let progress = backdrop::scroll_progress(scroll_y, scroll_height, viewport_h);
                for t in elements.borrow_mut().iter_mut() {
                    t.transform.scroll = Some(backdrop::scroll_part(t.group, t.index, progress));
                    t.write();
                }
            })?
        };

        Ok(Some(Self {
            elements,
            _listeners: vec![on_move, on_scroll],
        }))
    }
}

impl Drop for ReactiveBackground {
    fn drop(&mut self) {
        for t in self.elements.borrow().iter() {
            dom::clear_style(&t.el, "transform");
            if t.group == Group::Mote {
                dom::clear_style(&t.el, "opacity");
            }
        }
    }
}
