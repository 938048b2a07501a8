pub const DEFAULT_GUTTER_PX: u32 = 30;
pub const DEFAULT_ITEM_SELECTOR: &str = ".grid-item";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MasonryOptions {
    pub gutter: u32,
    pub item_selector: String,
}

impl Default for MasonryOptions {
    fn default() -> Self {
        Self {
            gutter: DEFAULT_GUTTER_PX,
            item_selector: DEFAULT_ITEM_SELECTOR.to_string(),
        }
    }
}

/// Option value handed to the layout library.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Number(f64),
    Text(String),
}

impl MasonryOptions {
    /// Keys as the Masonry constructor expects them.
    pub fn entries(&self) -> Vec<(&'static str, OptionValue)> {
        let mut entries = vec![("gutter", OptionValue::Number(self.gutter as f64))];
        let selector = self.item_selector.trim();
        if !selector.is_empty() {
            entries.push(("itemSelector", OptionValue::Text(selector.to_string())));
        }
        entries
    }
}
