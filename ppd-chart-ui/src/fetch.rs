//! Dataset fetch over `web-sys`.
//!
//! One GET, no timeout and no retry. A hung request leaves the app on its
//! loading screen.

use ppd_core::{DashboardError, Dataset, LoadError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetch the response body at `url` as text.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let network = |reason: String| LoadError::Network {
        url: url.to_string(),
        reason,
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| network(format!("request error: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| network(format!("fetch error: {:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| network("response is not a Response".to_string()))?;

    if !resp.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let body = |reason: String| LoadError::Body {
        url: url.to_string(),
        reason,
    };
    let text = JsFuture::from(resp.text().map_err(|e| body(format!("{:?}", e)))?)
        .await
        .map_err(|e| body(format!("{:?}", e)))?;

    text.as_string()
        .ok_or_else(|| body("body is not a string".to_string()))
}

/// Fetch and shape-check the dataset.
pub async fn load_dataset(url: &str) -> Result<Dataset, DashboardError> {
    log::info!("[PPD] fetch: Loading dataset from {}", url);
    let text = fetch_text(url).await?;
    Dataset::from_json_str(&text)
}
