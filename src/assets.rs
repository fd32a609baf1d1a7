use crate::constants::asset_url;
use showcase_core::{glb, ProductAsset, SceneInventory, ShowcaseError, CATALOG};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fetch every catalogue asset concurrently and record each outcome.
///
/// Loads are fire-and-forget: a failure is recorded once and never retried.
pub fn spawn_asset_loads(inventory: Rc<RefCell<SceneInventory>>) {
    for asset in CATALOG.iter() {
        let inventory = inventory.clone();
        spawn_local(async move {
            let outcome = load(asset).await;
            inventory.borrow_mut().record(asset.product, outcome);
            let pending = inventory.borrow().pending_count();
            if pending == 0 {
                log::info!(
                    "[assets] all loads settled, {} placed",
                    inventory.borrow().placed().count()
                );
            }
        });
    }
}

async fn load(asset: &ProductAsset) -> Result<glb::GlbHeader, ShowcaseError> {
    let bytes = fetch_bytes(&asset_url(asset.path))
        .await
        .map_err(|reason| ShowcaseError::AssetLoad {
            path: asset.path.to_string(),
            reason,
        })?;
    glb::parse_header(asset.path, &bytes)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    let window = web::window().ok_or("no window")?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_reason)?
        .dyn_into()
        .map_err(js_reason)?;
    if !resp.ok() {
        return Err(format!("HTTP {} {}", resp.status(), resp.status_text()));
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_reason)?)
        .await
        .map_err(js_reason)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

fn js_reason(v: JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{:?}", v))
}
