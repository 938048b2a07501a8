use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use gallery_core::{MasonryOptions, OptionValue};

use crate::dom::js_err;

const MASONRY_GLOBAL: &str = "Masonry";

/// Lays out the tile grid with the page's Masonry library and returns the instance.
pub(crate) fn init_masonry(grid: &Element, options: &MasonryOptions) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "missing window".to_string())?;
    let value = Reflect::get(&window, &JsValue::from_str(MASONRY_GLOBAL)).map_err(js_err)?;
    if value.is_null() || value.is_undefined() {
        return Err("Masonry library not loaded".to_string());
    }
    let constructor = value
        .dyn_into::<Function>()
        .map_err(|_| "Masonry is not a constructor".to_string())?;
    let options = options_object(options).map_err(js_err)?;
    let args = Array::of2(grid, &options);
    Reflect::construct(&constructor, &args).map_err(js_err)
}

pub(crate) fn options_object(options: &MasonryOptions) -> Result<Object, JsValue> {
    let object = Object::new();
    for (key, value) in options.entries() {
        let value = match value {
            OptionValue::Number(number) => JsValue::from_f64(number),
            OptionValue::Text(text) => JsValue::from_str(&text),
        };
        Reflect::set(&object, &JsValue::from_str(key), &value)?;
    }
    Ok(object)
}
