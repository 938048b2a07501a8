use wasm_bindgen::JsCast;
use web_sys::Element;

/// A detached-on-drop container appended to the test page.
pub(crate) struct Fixture {
    root: Element,
}

impl Fixture {
    pub(crate) fn new(html: &str) -> Self {
        let document = crate::dom::document().expect("document available");
        let root = document.create_element("div").expect("create fixture root");
        root.set_inner_html(html);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append fixture root");
        Self { root }
    }

    pub(crate) fn one(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .expect("valid selector")
            .unwrap_or_else(|| panic!("fixture has no {selector}"))
    }

    pub(crate) fn all(&self, selector: &str) -> Vec<Element> {
        let list = self.root.query_selector_all(selector).expect("valid selector");
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}
