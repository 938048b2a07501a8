use crate::filter::FilterClassPolicy;
use crate::layout::MasonryOptions;

pub const DEFAULT_LIKE_TIMEOUT_MS: u32 = 10_000;
const MIN_LIKE_TIMEOUT_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// Prefix the backend is mounted under, `""` at the site root.
    pub script_root: String,
    pub like_timeout_ms: u32,
    pub masonry: MasonryOptions,
    pub filter_policy: FilterClassPolicy,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            script_root: String::new(),
            like_timeout_ms: DEFAULT_LIKE_TIMEOUT_MS,
            masonry: MasonryOptions::default(),
            filter_policy: FilterClassPolicy::default(),
        }
    }
}

fn parse_u32(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

pub fn parse_timeout_ms(raw: &str) -> Option<u32> {
    parse_u32(raw).map(|value| value.max(MIN_LIKE_TIMEOUT_MS))
}

pub fn parse_gutter(raw: &str) -> Option<u32> {
    parse_u32(raw)
}

pub fn normalize_script_root(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('"');
    trimmed.trim_end_matches('/').to_string()
}
