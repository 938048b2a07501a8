use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal, Element, Event};

use gallery_core::{
    like_endpoint, GalleryError, ImageId, InFlight, LikeRequest, LikeState, NOT_LIKED_CLASS,
};

use crate::dom::{self, DATA_IMAGE};

pub(crate) type SendFuture = Pin<Box<dyn Future<Output = Result<(), GalleryError>>>>;

/// Sends one like request to `endpoint`, honouring the abort signal.
pub(crate) type LikeTransport = Rc<dyn Fn(String, LikeRequest, AbortSignal) -> SendFuture>;

pub(crate) fn http_transport() -> LikeTransport {
    Rc::new(
        |endpoint: String, request: LikeRequest, signal: AbortSignal| -> SendFuture {
            Box::pin(send_like(endpoint, request, signal))
        },
    )
}

async fn send_like(
    endpoint: String,
    request: LikeRequest,
    signal: AbortSignal,
) -> Result<(), GalleryError> {
    let pairs = request.query_pairs();
    let response = Request::get(&endpoint)
        .query(pairs.iter().map(|(key, value)| (*key, value.as_str())))
        .abort_signal(Some(&signal))
        .send()
        .await
        .map_err(|err| {
            if signal.aborted() {
                GalleryError::Aborted
            } else {
                GalleryError::Transport(err.to_string())
            }
        })?;
    if !response.ok() {
        return Err(GalleryError::Status(response.status()));
    }
    // The body is unused but must decode, as the page always expected json back.
    response
        .json::<serde_json::Value>()
        .await
        .map_err(|err| GalleryError::Decode(err.to_string()))?;
    Ok(())
}

/// One clickable like icon and the state it currently shows.
#[derive(Clone)]
pub(crate) struct LikeAffordance {
    element: Element,
    image_id: ImageId,
    state: Rc<Cell<LikeState>>,
}

impl LikeAffordance {
    pub(crate) fn from_element(element: Element) -> Result<Self, GalleryError> {
        let raw_id = dom::data_attr(&element, DATA_IMAGE).unwrap_or_default();
        let image_id = ImageId::parse(&raw_id)?;
        let state = LikeState::from_markup(element.class_list().contains(NOT_LIKED_CLASS));
        Ok(Self {
            element,
            image_id,
            state: Rc::new(Cell::new(state)),
        })
    }

    pub(crate) fn state(&self) -> LikeState {
        self.state.get()
    }

    pub(crate) fn image_id(&self) -> &ImageId {
        &self.image_id
    }

    pub(crate) fn apply(&self, state: LikeState) {
        self.state.set(state);
        let classes = self.element.class_list();
        let _ = classes.remove_1(state.stale_class_name());
        let _ = classes.add_1(state.class_name());
        let pressed = if state.is_liked() { "true" } else { "false" };
        let _ = self.element.set_attribute("aria-pressed", pressed);
    }
}

pub(crate) struct LikeClient {
    endpoint: String,
    timeout_ms: u32,
    transport: LikeTransport,
    inflight: RefCell<InFlight<AbortController>>,
}

impl LikeClient {
    pub(crate) fn new(script_root: &str, timeout_ms: u32, transport: LikeTransport) -> Self {
        Self {
            endpoint: like_endpoint(script_root),
            timeout_ms,
            transport,
            inflight: RefCell::new(InFlight::new()),
        }
    }

    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Starts the request for a click; the affordance changes only once the server accepts it.
    pub(crate) fn toggle(self: &Rc<Self>, affordance: &LikeAffordance) {
        let request = LikeRequest::for_click(affordance.image_id().clone(), affordance.state());
        let controller = match AbortController::new() {
            Ok(controller) => controller,
            Err(err) => {
                gloo::console::error!("like: abort controller unavailable", dom::js_err(err));
                return;
            }
        };
        let signal = controller.signal();
        let (ticket, superseded) = self
            .inflight
            .borrow_mut()
            .begin(request.image_id.clone(), controller.clone());
        if let Some(previous) = superseded {
            previous.abort();
        }

        let timed_out = Rc::new(Cell::new(false));
        let timeout = {
            let timed_out = timed_out.clone();
            let controller = controller.clone();
            Timeout::new(self.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let future = (self.transport)(self.endpoint.clone(), request.clone(), signal);
        let client = self.clone();
        let affordance = affordance.clone();
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            let result = future.await;
            drop(timeout);
            let result = match result {
                Err(GalleryError::Aborted) if timed_out.get() => {
                    Err(GalleryError::TimedOut(timeout_ms))
                }
                other => other,
            };
            let current = client.inflight.borrow_mut().finish(ticket);
            match result {
                Ok(()) if current => affordance.apply(request.target_state()),
                Ok(()) => {
                    gloo::console::log!(
                        "like: stale response ignored",
                        request.image_id.to_string()
                    );
                }
                Err(err) if err.is_superseded() => {}
                Err(err) => {
                    gloo::console::warn!(
                        "like request failed",
                        request.image_id.to_string(),
                        err.to_string()
                    );
                }
            }
        });
    }
}

pub(crate) fn bind_like(affordance: LikeAffordance, client: Rc<LikeClient>) -> EventListener {
    let target = affordance.element.clone();
    EventListener::new_with_options(
        &target,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            event.prevent_default();
            event.stop_propagation();
            client.toggle(&affordance);
        },
    )
}
