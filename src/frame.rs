use crate::dom::SectionNodes;
use crate::render;
use crate::sections::OpacityCache;
use instant::Instant;
use showcase_core::gpu::{scene_instances, InstanceRaw};
use showcase_core::{SceneInventory, ScrollContext, Timeline};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Log a frame-rate line this often
const STATS_INTERVAL_SEC: f32 = 10.0;

pub struct FrameContext<'a> {
    pub timeline: Timeline,
    pub scroll: ScrollContext,
    pub latest_percent: Rc<Cell<f32>>,

    pub sections: SectionNodes,
    pub opacity_cache: OpacityCache,

    pub inventory: Rc<RefCell<SceneInventory>>,
    pub instances: Vec<InstanceRaw>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub stats_elapsed: f32,
    pub stats_frames: u32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.log_stats(dt_sec);

        self.scroll.set_percent(self.latest_percent.get());
        self.timeline.play(&mut self.scroll);

        let state = *self.scroll.state();
        let sections = &self.sections;
        self.opacity_cache
            .sync(&state.sections, |i, v| sections.set_opacity(i, v));

        if let Some(g) = &mut self.gpu {
            let opaque = scene_instances(&self.inventory.borrow(), &mut self.instances);
            g.set_instances(&self.instances, opaque);
            g.set_camera(&state.camera);
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn log_stats(&mut self, dt_sec: f32) {
        self.stats_elapsed += dt_sec;
        self.stats_frames += 1;
        if self.stats_elapsed >= STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps at {:.2}%",
                self.stats_frames as f32 / self.stats_elapsed,
                self.scroll.percent()
            );
            self.stats_elapsed = 0.0;
            self.stats_frames = 0;
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
