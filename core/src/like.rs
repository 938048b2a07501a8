use crate::image::ImageId;

/// Class marking an affordance the user has liked.
pub const LIKED_CLASS: &str = "fas";
/// Class marking an affordance the user has not liked yet.
pub const NOT_LIKED_CLASS: &str = "far";

pub const LIKE_PATH: &str = "/like";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    NotLiked,
}

impl LikeState {
    /// Reads the state the server rendered: the not-liked marker means the next click likes.
    pub fn from_markup(has_not_liked_marker: bool) -> Self {
        if has_not_liked_marker {
            LikeState::NotLiked
        } else {
            LikeState::Liked
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            LikeState::Liked => LikeState::NotLiked,
            LikeState::NotLiked => LikeState::Liked,
        }
    }

    pub fn is_liked(self) -> bool {
        self == LikeState::Liked
    }

    pub fn class_name(self) -> &'static str {
        match self {
            LikeState::Liked => LIKED_CLASS,
            LikeState::NotLiked => NOT_LIKED_CLASS,
        }
    }

    pub fn stale_class_name(self) -> &'static str {
        self.toggled().class_name()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeRequest {
    pub image_id: ImageId,
    pub like: bool,
}

impl LikeRequest {
    /// Request for a click made while the affordance shows `current`.
    pub fn for_click(image_id: ImageId, current: LikeState) -> Self {
        Self {
            image_id,
            like: current == LikeState::NotLiked,
        }
    }

    /// State the affordance should show once the server accepted the request.
    pub fn target_state(&self) -> LikeState {
        if self.like {
            LikeState::Liked
        } else {
            LikeState::NotLiked
        }
    }

    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        let like = if self.like { "true" } else { "false" };
        [
            ("like", like.to_string()),
            ("image_id", self.image_id.as_str().to_string()),
        ]
    }
}

pub fn like_endpoint(script_root: &str) -> String {
    let root = script_root.trim().trim_end_matches('/');
    format!("{root}{LIKE_PATH}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ImageId {
        ImageId::parse(raw).unwrap()
    }

    #[test]
    fn not_liked_marker_means_click_likes() {
        let state = LikeState::from_markup(true);
        let request = LikeRequest::for_click(id("7"), state);
        assert!(request.like);
        assert_eq!(request.target_state(), LikeState::Liked);
        assert_eq!(request.target_state().class_name(), LIKED_CLASS);
        assert_eq!(request.target_state().stale_class_name(), NOT_LIKED_CLASS);
    }

    #[test]
    fn missing_marker_means_click_unlikes() {
        let request = LikeRequest::for_click(id("7"), LikeState::from_markup(false));
        assert!(!request.like);
        assert_eq!(request.target_state(), LikeState::NotLiked);
    }

    #[test]
    fn query_uses_literal_booleans() {
        let request = LikeRequest::for_click(id("img-9"), LikeState::NotLiked);
        let pairs = request.query_pairs();
        assert_eq!(pairs[0], ("like", "true".to_string()));
        assert_eq!(pairs[1], ("image_id", "img-9".to_string()));
    }

    #[test]
    fn endpoint_joins_root() {
        assert_eq!(like_endpoint(""), "/like");
        assert_eq!(like_endpoint("/app"), "/app/like");
        assert_eq!(like_endpoint("https://example.org/app/"), "https://example.org/app/like");
    }
}
