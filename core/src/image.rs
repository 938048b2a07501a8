use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, Result};

/// Image as stored by the backend and embedded by the page template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub filter: String,
    pub upload_location: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub image: ImageRecord,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPayload {
    Wrapped(ImagePayload),
    Bare(ImageRecord),
}

/// Decodes the `data-image` attribute of a grid tile.
///
/// Templates emit `{"image": {...}}`; a bare record is accepted too.
pub fn parse_image_payload(raw: &str) -> Result<ImageRecord> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GalleryError::Payload("empty payload".to_string()));
    }
    match serde_json::from_str::<RawPayload>(trimmed) {
        Ok(RawPayload::Wrapped(payload)) => Ok(payload.image),
        Ok(RawPayload::Bare(record)) => Ok(record),
        Err(err) => Err(GalleryError::Payload(err.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(GalleryError::InvalidImageId("empty".to_string()));
        }
        if let Some(ch) = trimmed.chars().find(|ch| ch.is_control()) {
            return Err(GalleryError::InvalidImageId(format!(
                "control character {:?}",
                ch
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ImageId {
    type Err = GalleryError;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_payload() {
        let raw = r#"{"image":{"name":"Sunset","description":"A view","filter":"vintage","upload_location":"/img/1.jpg"}}"#;
        let record = parse_image_payload(raw).expect("payload");
        assert_eq!(record.name, "Sunset");
        assert_eq!(record.filter, "vintage");
        assert_eq!(record.category, None);
    }

    #[test]
    fn parses_bare_record_with_backend_fields() {
        let raw = r#"{"id":"abc","name":"N","description":"D","filter":"none","upload_location":"/u","category":"nature","created_at":1550000000}"#;
        let record = parse_image_payload(raw).expect("record");
        assert_eq!(record.id.as_deref(), Some("abc"));
        assert_eq!(record.category.as_deref(), Some("nature"));
        assert_eq!(record.created_at, Some(1_550_000_000));
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(matches!(
            parse_image_payload("{not json"),
            Err(GalleryError::Payload(_))
        ));
        assert!(matches!(parse_image_payload("  "), Err(GalleryError::Payload(_))));
    }

    #[test]
    fn image_id_is_trimmed_and_validated() {
        assert_eq!(ImageId::parse(" 42 ").unwrap().as_str(), "42");
        assert!(ImageId::parse("").is_err());
        assert!(ImageId::parse("a\nb").is_err());
    }
}
