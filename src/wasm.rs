//! WASM bindings for running inside the pull request page.
//!
//! The browser side locates the elements; these functions do the rendering
//! and message composition.

use wasm_bindgen::prelude::*;

use crate::config::PageSelectors;
use crate::dom::HtmlOptions;
use crate::merge_message::compose_merge_message;
use crate::pull_request::PullRequest;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a description's inner HTML as plain text.
#[wasm_bindgen]
pub fn html_to_text(html: &str) -> String {
    crate::text::html_to_text(html)
}

/// Compose a merge message from already-known parts.
#[wasm_bindgen]
pub fn merge_message(title: &str, number: u32, description: &str) -> String {
    compose_merge_message(title, u64::from(number), description)
}

/// Scrape a serialized pull request page and compose its merge message.
///
/// Relative URLs in the description resolve against `page_url` when given.
#[wasm_bindgen]
pub fn merge_message_from_page(html: &str, page_url: Option<String>) -> Result<String, JsValue> {
    let mut options = HtmlOptions::default();
    if let Some(page_url) = page_url {
        let base = url::Url::parse(&page_url).map_err(|e| JsValue::from_str(&e.to_string()))?;
        options = options.with_base_url(base);
    }

    let pr = PullRequest::from_html(html, &PageSelectors::default(), &options)
        .map_err(|e| JsValue::from_str(&format!("{}: {e}", e.code())))?;
    Ok(pr.merge_message())
}
