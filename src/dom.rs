use crate::constants::{
    backing_size, opacity_css, section_selector, CANVAS_ID, CANVAS_STYLE,
};
use showcase_core::SECTION_COUNT;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

/// Find the showcase canvas, or create one fixed behind the page content.
pub fn find_or_create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{CANVAS_ID} is not a canvas: {:?}", e)));
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    log::info!("[dom] created #{}", CANVAS_ID);
    Ok(canvas)
}

/// Scroll offset, scrollable height and viewport height of the page, in CSS px.
///
/// Falls back to `<body>` when the root element reports nothing, as quirks-mode
/// pages scroll the body instead.
pub fn page_scroll_metrics(document: &web::Document) -> Option<(f64, f64, f64)> {
    let root = document.document_element()?;
    let body = document.body();
    let pick = |root_v: i32, body_v: Option<i32>| {
        if root_v != 0 {
            root_v
        } else {
            body_v.unwrap_or(0)
        }
    };
    let top = pick(root.scroll_top(), body.as_ref().map(|b| b.scroll_top()));
    let height = pick(root.scroll_height(), body.as_ref().map(|b| b.scroll_height()));
    Some((top as f64, height as f64, root.client_height() as f64))
}

/// The text section content blocks, by section index.
pub struct SectionNodes {
    nodes: Vec<Option<web::HtmlElement>>,
}

impl SectionNodes {
    pub fn resolve(document: &web::Document) -> Self {
        let nodes: Vec<Option<web::HtmlElement>> = (0..SECTION_COUNT)
            .map(|i| {
                let selector = section_selector(i);
                let found = document
                    .query_selector(&selector)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
                if found.is_none() {
                    log::warn!("[dom] missing `{}`", selector);
                }
                found
            })
            .collect();
        let present = nodes.iter().filter(|n| n.is_some()).count();
        log::info!("[dom] {}/{} sections found", present, SECTION_COUNT);
        Self { nodes }
    }

    /// Write a section's opacity; missing sections are skipped.
    pub fn set_opacity(&self, section: usize, value: f32) {
        if let Some(Some(el)) = self.nodes.get(section) {
            _ = el.style().set_property("opacity", &opacity_css(value));
        }
    }
}
