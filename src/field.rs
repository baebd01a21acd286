use crate::clock::FrameLoop;
use crate::constants::*;
use crate::dom::{self, js_err};
use crate::events::Listener;
use crate::particles::{Field, FieldParams};
use glam::Vec2;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
     pointer-events: none;";

/// Full-viewport canvas of drifting particles linked by proximity lines.
pub struct ParticleField {
    canvas: web::HtmlCanvasElement,
    frame: FrameLoop,
    _listeners: Vec<Listener>,
}

impl ParticleField {
    /// Create and append the canvas, seed the particles and start drawing.
    /// Returns `Ok(None)` on pages without a `<body>`.
    pub fn install(
        document: &web::Document,
        params: FieldParams,
    ) -> anyhow::Result<Option<Self>> {
        let Some(window) = web::window() else {
            return Ok(None);
        };
        let Some(body) = document.body() else {
            log::debug!("[particles] no <body>, skipping");
            return Ok(None);
        };

        // a recreated canvas always starts from a fresh seed
        if let Some(stale) = document.get_element_by_id(CANVAS_ID) {
            stale.remove();
        }
        let canvas: web::HtmlCanvasElement = dom::create_element(document, "canvas")?;
        canvas.set_id(CANVAS_ID);
        canvas.style().set_css_text(CANVAS_CSS);
        dom::set_style(&canvas, "z-index", CANVAS_Z_INDEX);
        dom::set_style(&canvas, "opacity", CANVAS_OPACITY);
        body.append_child(&canvas).map_err(js_err)?;

        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("unexpected 2d context: {:?}", e))?;

        let size = dom::viewport_size(&window);
        let mut field = Field::new(params, size.x, size.y);
        sync_canvas_size(&canvas, size);
        field.initialize(&mut rand::thread_rng());
        log::info!(
            "[particles] seeded {} particles on {}x{}",
            field.particles().len(),
            size.x,
            size.y
        );
        let field = Rc::new(RefCell::new(field));

        let resize = {
            let canvas = canvas.clone();
            let field = field.clone();
            let window_resize = window.clone();
            Listener::new(&window, "resize", move |_: web::Event| {
                let size = dom::viewport_size(&window_resize);
                // assigning canvas dimensions clears it, so skip no-op resizes
                if field.borrow_mut().resize(size.x, size.y) {
                    sync_canvas_size(&canvas, size);
                }
            })?
        };

        let frame = {
            let field = field.clone();
            FrameLoop::new(move || {
                let mut field = field.borrow_mut();
                field.step();
                draw(&ctx, &field);
            })
        };
        frame.start();

        Ok(Some(Self {
            canvas,
            frame,
            _listeners: vec![resize],
        }))
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        self.frame.stop();
        self.canvas.remove();
    }
}

fn sync_canvas_size(canvas: &web::HtmlCanvasElement, size: Vec2) {
    canvas.set_width(size.x.max(0.0) as u32);
    canvas.set_height(size.y.max(0.0) as u32);
}

fn draw(ctx: &web::CanvasRenderingContext2d, field: &Field) {
    let bounds = field.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);

    let (r, g, b) = PARTICLE_RGB;
    for p in field.particles() {
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
        ctx.set_fill_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, p.opacity));
        ctx.fill();
    }

    ctx.set_line_width(LINK_WIDTH);
    field.for_each_link(|link| {
        ctx.begin_path();
        ctx.move_to(link.from.x as f64, link.from.y as f64);
        ctx.line_to(link.to.x as f64, link.to.y as f64);
        ctx.set_stroke_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, link.alpha));
        ctx.stroke();
    });
}
