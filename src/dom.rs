use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};

pub(crate) const LIKE_SELECTOR: &str = "i.like";
pub(crate) const GRID_SELECTOR: &str = ".grid";
pub(crate) const GRID_ITEM_SELECTOR: &str = ".grid-item";
pub(crate) const TILE_FIGURE_SELECTOR: &str = ".grid-item figure";
pub(crate) const MODAL_ID: &str = "image-modal";
pub(crate) const MODAL_BODY_SELECTOR: &str = ".modal-body";
pub(crate) const FILTER_SELECT_ID: &str = "filter-select";
pub(crate) const CATEGORY_SELECT_ID: &str = "category";
pub(crate) const IMAGE_FIGURE_SELECTOR: &str = "#image figure";

pub(crate) const DATA_IMAGE: &str = "data-image";
pub(crate) const DATA_FILTER: &str = "data-filter";
pub(crate) const DATA_CATEGORY: &str = "data-category";

/// Every element the page handlers touch, resolved once at page ready.
pub(crate) struct PageElements {
    pub(crate) body: Option<HtmlElement>,
    pub(crate) like_affordances: Vec<Element>,
    pub(crate) grid: Option<Element>,
    pub(crate) tile_figures: Vec<Element>,
    pub(crate) modal: Option<Element>,
    pub(crate) modal_body: Option<Element>,
    pub(crate) filter_select: Option<HtmlSelectElement>,
    pub(crate) category_select: Option<HtmlSelectElement>,
    pub(crate) image_figures: Vec<Element>,
}

impl PageElements {
    pub(crate) fn discover(document: &Document) -> Self {
        let modal = document.get_element_by_id(MODAL_ID);
        let modal_body = modal
            .as_ref()
            .and_then(|modal| modal.query_selector(MODAL_BODY_SELECTOR).ok().flatten());
        Self {
            body: document.body(),
            like_affordances: query_all(document, LIKE_SELECTOR),
            grid: document.query_selector(GRID_SELECTOR).ok().flatten(),
            tile_figures: query_all(document, TILE_FIGURE_SELECTOR),
            modal,
            modal_body,
            filter_select: select_by_id(document, FILTER_SELECT_ID),
            category_select: select_by_id(document, CATEGORY_SELECT_ID),
            image_figures: query_all(document, IMAGE_FIGURE_SELECTOR),
        }
    }
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn select_by_id(document: &Document, id: &str) -> Option<HtmlSelectElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
}

pub(crate) fn data_attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

pub(crate) fn set_classes(element: &Element, classes: &[String]) {
    element.set_class_name(&classes.join(" "));
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        if let Some(message) = error.message().as_string() {
            return message;
        }
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
