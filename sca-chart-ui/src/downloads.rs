//! User-triggered report downloads.
//!
//! Builds a Blob from the report text, points a temporary anchor at its
//! object URL, and clicks it. Fire-and-forget: failures are logged, not
//! surfaced.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offer `content` to the user as a file download.
pub fn download_text(filename: &str, mime: &str, content: &str) {
    if let Err(e) = try_download(filename, mime, content) {
        log::error!("download of {filename} failed: {e:?}");
    }
}

fn try_download(filename: &str, mime: &str, content: &str) -> Result<(), JsValue> {
    let props = BlobPropertyBag::new();
    props.set_type(mime);
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url)?;
    Ok(())
}
