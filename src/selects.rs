use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlSelectElement};

use gallery_core::{initial_select_value, project_filter_classes, FilterClassPolicy};

use crate::dom;

/// Selects the value the server embedded in `attr`. Does nothing when the control is absent.
pub(crate) fn init_select_from_data(
    select: Option<&HtmlSelectElement>,
    attr: &str,
) -> Option<String> {
    let select = select?;
    let value = initial_select_value(select.get_attribute(attr).as_deref())?;
    select.set_value(&value);
    Some(value)
}

pub(crate) fn apply_filter(figures: &[Element], value: &str, policy: FilterClassPolicy) {
    for figure in figures {
        let classes = project_filter_classes(&figure.class_name(), value, policy);
        dom::set_classes(figure, &classes);
    }
}

pub(crate) fn bind_filter_change(
    select: &HtmlSelectElement,
    figures: Vec<Element>,
    policy: FilterClassPolicy,
) -> EventListener {
    EventListener::new(select, "change", move |event: &Event| {
        let Some(select) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        apply_filter(&figures, &select.value(), policy);
    })
}
