//! Tag descriptors and the host document model.
//!
//! Descriptors are plain data handed to the host's HTML generator; this
//! crate never serializes them itself.

mod build;
mod place;

pub use build::{build_src, hint_tag, script_attrs, script_tag};
pub use place::place_tags;

/// An HTML attribute value: text (`src="..."`) or boolean (`async`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AttrValue::Flag(b) => Some(*b),
            AttrValue::Text(_) => None,
        }
    }
}

/// One HTML tag as the host's document model represents it.
///
/// Attributes keep insertion order so generated markup is stable across
/// builds. Produced fresh per compilation and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    pub tag_name: String,
    pub self_closing: bool,
    pub attributes: Vec<(String, AttrValue)>,
}

impl TagDescriptor {
    /// Looks up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

/// The host's mutable in-memory page: ordered head and body tag lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentModel {
    pub head: Vec<TagDescriptor>,
    pub body: Vec<TagDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_lookup_finds_by_name() {
        let tag = TagDescriptor {
            tag_name: "script".to_string(),
            self_closing: true,
            attributes: vec![
                ("src".to_string(), AttrValue::Text("a.js".to_string())),
                ("async".to_string(), AttrValue::Flag(true)),
            ],
        };
        assert_eq!(tag.attr("src").and_then(AttrValue::as_text), Some("a.js"));
        assert_eq!(tag.attr("async").and_then(AttrValue::as_flag), Some(true));
        assert!(tag.attr("defer").is_none());
    }
}
