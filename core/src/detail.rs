use std::fmt::Write;

use crate::filter::filter_class;
use crate::image::ImageRecord;

/// Escapes text for both element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// What the detail dialog shows for one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub figure_class: String,
    pub src: String,
    pub alt: String,
    pub title: String,
    pub description: String,
}

impl DetailView {
    pub fn from_record(record: &ImageRecord) -> Self {
        Self {
            figure_class: filter_class(&record.filter),
            src: record.upload_location.clone(),
            alt: format!("{},{}", record.name, record.description),
            title: record.name.clone(),
            description: record.description.clone(),
        }
    }

    /// Markup for the modal body. Every field is escaped before insertion.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<figure class=\"{}\"><img class=\"modal-img\" src=\"{}\" alt=\"{}\"></figure>",
            escape_html(&self.figure_class),
            escape_html(&self.src),
            escape_html(&self.alt),
        );
        let _ = write!(
            html,
            "<h5 class=\"modal-title\">{}<i class=\"fa fa-times\" data-dismiss=\"modal\" aria-label=\"Close\" aria-hidden=\"true\"></i></h5>",
            escape_html(&self.title),
        );
        let _ = write!(html, "<p>{}</p>", escape_html(&self.description));
        html
    }
}
