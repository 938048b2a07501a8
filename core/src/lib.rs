pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod image;
pub mod inflight;
pub mod layout;
pub mod like;

pub use config::PageConfig;
pub use detail::{escape_html, DetailView};
pub use error::GalleryError;
pub use filter::{
    filter_class, initial_select_value, project_filter_classes, FilterClassPolicy,
    FILTER_CLASS_PREFIX,
};
pub use image::{parse_image_payload, ImageId, ImagePayload, ImageRecord};
pub use inflight::{InFlight, Ticket};
pub use layout::{MasonryOptions, OptionValue};
pub use like::{like_endpoint, LikeRequest, LikeState, LIKED_CLASS, NOT_LIKED_CLASS};
