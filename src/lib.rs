#![cfg(target_arch = "wasm32")]
use instant::Instant;
use showcase_core::{product_tour, SceneInventory, ScrollContext};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod sections;

fn scroll_to_top(window: &web::Window) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_or_create_canvas(&document)?;
    events::wire_canvas_resize(&canvas);

    let latest_percent = Rc::new(Cell::new(0.0_f32));
    events::wire_scroll(latest_percent.clone());

    let sections = dom::SectionNodes::resolve(&document);
    let timeline = product_tour()?;
    let scroll = ScrollContext::new(&timeline);

    let inventory = Rc::new(RefCell::new(SceneInventory::new()));
    assets::spawn_asset_loads(inventory.clone());

    // Without a GPU the text sections still animate
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        timeline,
        scroll,
        latest_percent,
        sections,
        opacity_cache: sections::OpacityCache::new(),
        inventory,
        instances: Vec::new(),
        canvas,
        gpu,
        last_instant: Instant::now(),
        stats_elapsed: 0.0,
        stats_frames: 0,
    }));

    scroll_to_top(&window);
    frame::start_loop(frame_ctx);
    Ok(())
}
