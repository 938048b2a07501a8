use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Element;

use gallery_core::config::{normalize_script_root, parse_gutter, parse_timeout_ms};
use gallery_core::{FilterClassPolicy, PageConfig};

use crate::dom::PageElements;

const SCRIPT_ROOT_GLOBAL: &str = "$SCRIPT_ROOT";
const DATA_SCRIPT_ROOT: &str = "data-script-root";
const DATA_LIKE_TIMEOUT: &str = "data-like-timeout-ms";
const DATA_MASONRY_GUTTER: &str = "data-masonry-gutter";
const DATA_FILTER_POLICY: &str = "data-filter-policy";

pub(crate) fn load_page_config(elements: &PageElements) -> PageConfig {
    let mut config = PageConfig::default();
    let body: Option<&Element> = elements.body.as_ref().map(|body| body.as_ref());
    config.script_root = script_root(body);
    if let Some(timeout) = body
        .and_then(|body| body.get_attribute(DATA_LIKE_TIMEOUT))
        .and_then(|raw| parse_timeout_ms(&raw))
    {
        config.like_timeout_ms = timeout;
    }
    if let Some(gutter) = elements
        .grid
        .as_ref()
        .and_then(|grid| grid.get_attribute(DATA_MASONRY_GUTTER))
        .and_then(|raw| parse_gutter(&raw))
    {
        config.masonry.gutter = gutter;
    }
    if let Some(policy) = elements
        .filter_select
        .as_ref()
        .and_then(|select| select.get_attribute(DATA_FILTER_POLICY))
        .and_then(|raw| FilterClassPolicy::parse(&raw))
    {
        config.filter_policy = policy;
    }
    config
}

fn script_root(body: Option<&Element>) -> String {
    if let Some(root) = script_root_global() {
        return normalize_script_root(&root);
    }
    if let Some(root) = body.and_then(|body| body.get_attribute(DATA_SCRIPT_ROOT)) {
        return normalize_script_root(&root);
    }
    option_env!("GALLERY_SCRIPT_ROOT")
        .or(option_env!("TRUNK_PUBLIC_GALLERY_SCRIPT_ROOT"))
        .map(normalize_script_root)
        .unwrap_or_default()
}

fn script_root_global() -> Option<String> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(SCRIPT_ROOT_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value.as_string()
}
