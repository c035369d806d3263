//! Document Loading
//!
//! Fetches the pattern and yarn documents and decodes them straight from
//! the JS value, keeping the documents' key order.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crochet_core::{Catalogue, PatternRecord, PatternStore, YarnInventory, YarnRecord};

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// GET a same-origin JSON document and decode it
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window().ok_or("no window")?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Err(format!("{} answered {}", url, response.status()));
    }

    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| format!("{}: {}", url, e))
}

pub async fn load_patterns(url: &str) -> Result<Catalogue, String> {
    let records: IndexMap<String, PatternRecord> = fetch_json(url).await?;
    let store = PatternStore::from_records(records);
    log::info!("Loaded {} patterns from {}", store.len(), url);
    Ok(Catalogue::new(store))
}

pub async fn load_yarn(url: &str) -> Result<YarnInventory, String> {
    let records: IndexMap<String, YarnRecord> = fetch_json(url).await?;
    log::info!("Loaded {} yarns from {}", records.len(), url);
    Ok(YarnInventory::from_records(records))
}
