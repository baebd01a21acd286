#![cfg(target_arch = "wasm32")]
use crate::particles::FieldParams;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod backdrop;
mod background;
mod clock;
mod constants;
mod cursor;
mod dom;
mod events;
mod field;
mod particles;
mod trail;

// Installed effects for the page lifetime; `teardown` drops them.
struct Effects {
    background: Option<background::ReactiveBackground>,
    cursor: Option<cursor::CursorTrail>,
    field: Option<field::ParticleField>,
    _pointer: events::PointerTracker,
}

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Remove every listener, frame registration and element the effects created.
#[wasm_bindgen]
pub fn teardown() {
    let effects = EFFECTS.with(|slot| slot.borrow_mut().take());
    if let Some(effects) = effects {
        log::info!(
            "ambient-fx teardown (field={}, cursor={}, background={})",
            effects.field.is_some(),
            effects.cursor.is_some(),
            effects.background.is_some()
        );
    }
}

async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    JsFuture::from(ready).await.map_err(dom::js_err)?;
    Ok(())
}

// A failing effect is logged and skipped; the others still install.
fn settle<T>(name: &str, installed: anyhow::Result<Option<T>>) -> Option<T> {
    installed.unwrap_or_else(|e| {
        log::error!("[{}] install failed: {:?}", name, e);
        None
    })
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    if EFFECTS.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }

    // registered first so its pointermove listener runs before the readers'
    let pointer = events::PointerTracker::install(&document)?;

    let cursor = settle("cursor", cursor::CursorTrail::install(&document, pointer.reader()));
    let field = settle(
        "particles",
        field::ParticleField::install(&document, FieldParams::default()),
    );
    let background = settle(
        "background",
        background::ReactiveBackground::install(&document, pointer.reader()),
    );

    EFFECTS.with(|slot| {
        *slot.borrow_mut() = Some(Effects {
            background,
            cursor,
            field,
            _pointer: pointer,
        })
    });
    Ok(())
}
