//! Manoor Site (WebAssembly)
//!
//! Browser entry point: waits for the document to be parsed, loads the
//! embedded configuration, mounts the core runtime over the live DOM and
//! installs the listeners once.

mod browser_dom;
mod config_loader;
mod listeners;
mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use manoor_site_core::Runtime;
use wasm_bindgen::prelude::*;

pub use browser_dom::BrowserDom;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logger::init(log::LevelFilter::Warn);
    boot().map_err(|err| JsValue::from_str(&format!("{err:#}")))
}

fn boot() -> Result<()> {
    let window = web_sys::window().context("no global window")?;
    let document = window.document().context("window has no document")?;

    if document.ready_state() != "loading" {
        return mount();
    }

    let on_ready = Closure::<dyn FnMut()>::new(|| {
        if let Err(err) = mount() {
            log::error!("Site initialisation failed: {err:#}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("cannot wait for DOMContentLoaded: {}", browser_dom::js_error(&e)))?;
    on_ready.forget();
    Ok(())
}

fn mount() -> Result<()> {
    let window = web_sys::window().context("no global window")?;
    let document = window.document().context("window has no document")?;

    let config = config_loader::load(&document);
    log::set_max_level(config.log_level_filter());

    let runtime = Runtime::mount(BrowserDom::new(window, document), config)
        .context("mounting site runtime")?;
    let runtime = Rc::new(RefCell::new(runtime));
    listeners::install(&runtime)
}
