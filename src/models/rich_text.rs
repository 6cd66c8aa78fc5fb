//! Inline emphasis markup used in feature descriptions.
//!
//! Supported spans: `**strong**`, `*emphasis*` and `` `code` ``. Spans do not
//! nest, and a marker without a closing partner is kept as literal text.

use serde::{Deserialize, Serialize};

use crate::common::escape_html;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Emphasis(String),
    Strong(String),
    Code(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(t) | Self::Emphasis(t) | Self::Strong(t) | Self::Code(t) => t,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::Text(t) => escape_html(t),
            Self::Emphasis(t) => format!("<em>{}</em>", escape_html(t)),
            Self::Strong(t) => format!("<strong>{}</strong>", escape_html(t)),
            Self::Code(t) => format!("<code>{}</code>", escape_html(t)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    segments: Vec<Inline>,
}

// Longest marker first so `**` is never read as two `*`.
const MARKERS: [&str; 3] = ["**", "*", "`"];

impl RichText {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = source;

        while let Some(ch) = rest.chars().next() {
            match span_at(rest) {
                Some((inline, consumed)) => {
                    if !text.is_empty() {
                        segments.push(Inline::Text(std::mem::take(&mut text)));
                    }
                    segments.push(inline);
                    rest = &rest[consumed..];
                }
                None => {
                    text.push(ch);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }

        if !text.is_empty() {
            segments.push(Inline::Text(text));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Inline] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Inline::text).collect()
    }

    pub fn to_html(&self) -> String {
        self.segments.iter().map(Inline::to_html).collect()
    }
}

fn span_at(input: &str) -> Option<(Inline, usize)> {
    let marker = MARKERS.into_iter().find(|m| input.starts_with(m))?;
    let body = &input[marker.len()..];
    let end = body.find(marker)?;
    if end == 0 {
        return None;
    }

    let inner = body[..end].to_string();
    let inline = match marker {
        "**" => Inline::Strong(inner),
        "*" => Inline::Emphasis(inner),
        _ => Inline::Code(inner),
    };
    Some((inline, marker.len() * 2 + end))
}
