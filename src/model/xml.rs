//! XML element tree.

use indexmap::IndexMap;
use serde::Serialize;

/// A parsed XML element.
///
/// `text` holds the element's own character data (concatenated and trimmed),
/// or `None` when it has none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct XmlElement {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<XmlElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl XmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Number of elements in this subtree, including `self`.
    #[must_use]
    pub fn element_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(XmlElement::element_count)
            .sum::<usize>()
    }
}
