use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use gallery_core::{parse_image_payload, DetailView, ImageRecord};

use crate::dom::{self, DATA_IMAGE, GRID_ITEM_SELECTOR};

const OPEN_CLASS: &str = "show";
const BODY_OPEN_CLASS: &str = "modal-open";
const DISMISS_SELECTOR: &str = "[data-dismiss=\"modal\"]";

/// The image detail dialog and the page body it locks while open.
pub(crate) struct ModalController {
    modal: Element,
    content: Element,
    page_body: Option<HtmlElement>,
}

impl ModalController {
    pub(crate) fn new(modal: Element, content: Element, page_body: Option<HtmlElement>) -> Self {
        Self {
            modal,
            content,
            page_body,
        }
    }

    /// Replaces the dialog body with the detail of `record` and opens the dialog.
    pub(crate) fn show_detail(&self, record: &ImageRecord) {
        let view = DetailView::from_record(record);
        self.content.set_inner_html(&view.to_html());
        self.show();
    }

    pub(crate) fn show(&self) {
        let _ = self.modal.class_list().add_1(OPEN_CLASS);
        self.set_display("block");
        let _ = self.modal.remove_attribute("aria-hidden");
        let _ = self.modal.set_attribute("aria-modal", "true");
        if let Some(body) = &self.page_body {
            let _ = body.class_list().add_1(BODY_OPEN_CLASS);
        }
    }

    pub(crate) fn hide(&self) {
        let _ = self.modal.class_list().remove_1(OPEN_CLASS);
        self.set_display("none");
        let _ = self.modal.set_attribute("aria-hidden", "true");
        let _ = self.modal.remove_attribute("aria-modal");
        if let Some(body) = &self.page_body {
            let _ = body.class_list().remove_1(BODY_OPEN_CLASS);
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.modal.class_list().contains(OPEN_CLASS)
    }

    fn set_display(&self, value: &str) {
        if let Some(modal) = self.modal.dyn_ref::<HtmlElement>() {
            let _ = modal.style().set_property("display", value);
        }
    }

    fn is_dismiss_click(&self, target: &Element) -> bool {
        if self.modal.is_same_node(Some(target)) {
            return true;
        }
        target.closest(DISMISS_SELECTOR).ok().flatten().is_some()
    }
}

/// Close on the dismiss icon, on the backdrop, and on Escape.
pub(crate) fn bind_dismiss(modal: &Rc<ModalController>, document: &Document) -> Vec<EventListener> {
    let click = {
        let modal = modal.clone();
        let target = modal.modal.clone();
        EventListener::new(&target, "click", move |event: &Event| {
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            if modal.is_dismiss_click(&target) {
                modal.hide();
            }
        })
    };
    let escape = {
        let modal = modal.clone();
        EventListener::new(document, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "Escape" && modal.is_open() {
                modal.hide();
            }
        })
    };
    vec![click, escape]
}

/// Opens the dialog for the tile that owns `figure`.
pub(crate) fn bind_tile(figure: &Element, modal: Rc<ModalController>) -> EventListener {
    let figure_for_cb = figure.clone();
    EventListener::new(figure, "click", move |_event: &Event| {
        let Some(tile) = figure_for_cb.closest(GRID_ITEM_SELECTOR).ok().flatten() else {
            gloo::console::warn!("image tile missing around figure");
            return;
        };
        let raw = dom::data_attr(&tile, DATA_IMAGE).unwrap_or_default();
        match parse_image_payload(&raw) {
            Ok(record) => modal.show_detail(&record),
            Err(err) => gloo::console::warn!("image tile payload rejected", err.to_string()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PAGE: &str = r#"
        <div class="grid">
          <div class="grid-item" data-image='{"image":{"name":"Sunset","description":"A view","filter":"vintage","upload_location":"/img/1.jpg"}}'>
            <figure class="tile"><img src="/img/1.jpg"></figure>
          </div>
          <div class="grid-item" data-image='{"image":{"name":"&lt;b&gt;bold&lt;/b&gt;","description":"x","filter":"none","upload_location":"/img/2.jpg"}}'>
            <figure class="tile"><img src="/img/2.jpg"></figure>
          </div>
          <div class="grid-item" data-image='{broken'>
            <figure class="tile"><img src="/img/3.jpg"></figure>
          </div>
        </div>
        <div class="modal" id="test-modal" aria-hidden="true"><div class="modal-dialog"><div class="modal-body"></div></div></div>
    "#;

    fn controller(fixture: &Fixture) -> Rc<ModalController> {
        Rc::new(ModalController::new(
            fixture.one("#test-modal"),
            fixture.one(".modal-body"),
            None,
        ))
    }

    fn click(element: &Element) {
        element.dyn_ref::<HtmlElement>().expect("html element").click();
    }

    #[wasm_bindgen_test]
    fn tile_click_renders_detail_and_opens() {
        let fixture = Fixture::new(PAGE);
        let modal = controller(&fixture);
        let figures = fixture.all(".grid-item figure");
        let _listener = bind_tile(&figures[0], modal.clone());

        click(&figures[0]);

        let body = fixture.one(".modal-body");
        let image = body
            .query_selector("figure.filter-vintage img.modal-img")
            .unwrap()
            .expect("filtered image");
        assert_eq!(image.get_attribute("src").as_deref(), Some("/img/1.jpg"));
        let title = body.query_selector("h5.modal-title").unwrap().expect("title");
        assert_eq!(title.text_content().as_deref(), Some("Sunset"));
        let paragraph = body.query_selector("p").unwrap().expect("paragraph");
        assert_eq!(paragraph.text_content().as_deref(), Some("A view"));
        assert!(modal.is_open());
    }

    #[wasm_bindgen_test]
    fn names_are_inserted_as_text() {
        let fixture = Fixture::new(PAGE);
        let modal = controller(&fixture);
        let figures = fixture.all(".grid-item figure");
        let _listener = bind_tile(&figures[1], modal);

        click(&figures[1]);

        let body = fixture.one(".modal-body");
        assert!(body.query_selector("b").unwrap().is_none());
        let title = body.query_selector("h5.modal-title").unwrap().expect("title");
        assert_eq!(title.text_content().as_deref(), Some("<b>bold</b>"));
    }

    #[wasm_bindgen_test]
    fn malformed_payload_keeps_dialog_closed() {
        let fixture = Fixture::new(PAGE);
        let modal = controller(&fixture);
        let figures = fixture.all(".grid-item figure");
        let _listener = bind_tile(&figures[2], modal.clone());

        click(&figures[2]);

        assert!(!modal.is_open());
        assert_eq!(fixture.one(".modal-body").inner_html(), "");
    }

    #[wasm_bindgen_test]
    fn dismiss_icon_and_backdrop_close() {
        let fixture = Fixture::new(PAGE);
        let modal = controller(&fixture);
        let document = dom::document().expect("document");
        let figures = fixture.all(".grid-item figure");
        let _tile = bind_tile(&figures[0], modal.clone());
        let _dismiss = bind_dismiss(&modal, &document);

        click(&figures[0]);
        assert!(modal.is_open());
        click(&fixture.one(".modal-body [data-dismiss=\"modal\"]"));
        assert!(!modal.is_open());
        assert_eq!(
            fixture.one("#test-modal").get_attribute("aria-hidden").as_deref(),
            Some("true")
        );

        click(&figures[0]);
        click(&fixture.one(".modal-body p"));
        assert!(modal.is_open());
        click(&fixture.one("#test-modal"));
        assert!(!modal.is_open());
    }
}
