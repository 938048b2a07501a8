use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::Document;

use gallery_core::PageConfig;

use crate::config::load_page_config;
use crate::dom::{self, PageElements, DATA_CATEGORY, DATA_FILTER};
use crate::grid;
use crate::like::{self, LikeAffordance, LikeClient, LikeTransport};
use crate::modal::{self, ModalController};
use crate::selects;

thread_local! {
    static CONTROLLER: RefCell<Option<GalleryPageController>> = RefCell::new(None);
}

/// Owns every listener bound on the gallery page for as long as the page lives.
pub(crate) struct GalleryPageController {
    config: PageConfig,
    like_client: Rc<LikeClient>,
    modal: Option<Rc<ModalController>>,
    masonry: Option<JsValue>,
    listeners: Vec<EventListener>,
}

impl GalleryPageController {
    pub(crate) fn install(document: &Document, transport: LikeTransport) -> Self {
        let elements = PageElements::discover(document);
        let config = load_page_config(&elements);
        Self::wire(document, elements, config, transport)
    }

    pub(crate) fn wire(
        document: &Document,
        elements: PageElements,
        config: PageConfig,
        transport: LikeTransport,
    ) -> Self {
        let mut listeners = Vec::new();

        let like_client = Rc::new(LikeClient::new(
            &config.script_root,
            config.like_timeout_ms,
            transport,
        ));
        for element in elements.like_affordances {
            match LikeAffordance::from_element(element) {
                Ok(affordance) => listeners.push(like::bind_like(affordance, like_client.clone())),
                Err(err) => gloo::console::warn!("like icon skipped", err.to_string()),
            }
        }

        let masonry = elements.grid.as_ref().and_then(|grid_element| {
            match grid::init_masonry(grid_element, &config.masonry) {
                Ok(instance) => Some(instance),
                Err(err) => {
                    gloo::console::warn!("grid layout unavailable", err);
                    None
                }
            }
        });

        let modal = match (elements.modal, elements.modal_body) {
            (Some(modal_element), Some(content)) => {
                let controller = Rc::new(ModalController::new(
                    modal_element,
                    content,
                    elements.body.clone(),
                ));
                listeners.extend(modal::bind_dismiss(&controller, document));
                for figure in &elements.tile_figures {
                    listeners.push(modal::bind_tile(figure, controller.clone()));
                }
                Some(controller)
            }
            _ => None,
        };

        selects::init_select_from_data(elements.filter_select.as_ref(), DATA_FILTER);
        selects::init_select_from_data(elements.category_select.as_ref(), DATA_CATEGORY);
        if let Some(select) = &elements.filter_select {
            listeners.push(selects::bind_filter_change(
                select,
                elements.image_figures,
                config.filter_policy,
            ));
        }

        let controller = Self {
            config,
            like_client,
            modal,
            masonry,
            listeners,
        };
        controller.log_ready();
        controller
    }

    fn log_ready(&self) {
        gloo::console::log!(format!(
            "gallery page ready: {} listeners, likes via {} ({} ms), layout {}, modal {}, {:?}",
            self.listeners.len(),
            self.like_client.endpoint(),
            self.config.like_timeout_ms,
            if self.masonry.is_some() { "on" } else { "off" },
            if self.modal.is_some() { "on" } else { "off" },
            self.config.filter_policy,
        ));
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &PageConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[cfg(test)]
    pub(crate) fn has_modal(&self) -> bool {
        self.modal.is_some()
    }

    #[cfg(test)]
    pub(crate) fn has_layout(&self) -> bool {
        self.masonry.is_some()
    }

    #[cfg(test)]
    pub(crate) fn like_client(&self) -> &Rc<LikeClient> {
        &self.like_client
    }
}

/// Installs the controller once the document is parsed.
pub(crate) fn start() {
    let Some(document) = dom::document() else {
        return;
    };
    if is_loading(&document) {
        EventListener::once(&document, "DOMContentLoaded", |_| install_page()).forget();
    } else {
        install_page();
    }
}

fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

fn install_page() {
    let Some(document) = dom::document() else {
        return;
    };
    let controller = GalleryPageController::install(&document, like::http_transport());
    CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(controller);
    });
}
