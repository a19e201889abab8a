//! Element store abstraction.
//!
//! The applicator never touches a document directly. It queries elements by
//! marker, reads the marker attribute back and writes style properties through
//! the [`ElementStore`] trait. [`Document`] is an in-memory, JSON-backed
//! implementation used by the CLI and the tests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::Result;

/// Style property receiving the band color
pub const BACKGROUND_PROPERTY: &str = "background-color";

/// Style property receiving the contrasting black/white color
pub const FOREGROUND_PROPERTY: &str = "color";

/// Opaque reference to an element in a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementHandle(pub usize);

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Collaborator that owns the elements being styled
pub trait ElementStore {
    /// Elements carrying the marker attribute, in a stable order
    fn query_elements(&self, marker: &str) -> Vec<ElementHandle>;

    /// Raw value of an attribute, if present
    fn read_attribute(&self, handle: ElementHandle, marker: &str) -> Option<String>;

    /// Overwrite a single style property
    fn write_style(&mut self, handle: ElementHandle, property: &str, value: &str);
}

/// A styled element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Optional identifier, for humans reading the output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Element attributes, including data markers
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Inline style properties
    #[serde(default)]
    pub style: BTreeMap<String, String>,
}

impl Element {
    /// Create an element with a single attribute
    pub fn with_attribute(name: &str, value: &str) -> Self {
        let mut element = Element::default();
        element
            .attributes
            .insert(name.to_string(), value.to_string());
        element
    }
}

/// In-memory element store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Elements in document order
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    /// Create a document from a list of elements
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Parse a document from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a document from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize the document as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get an element by handle
    pub fn element(&self, handle: ElementHandle) -> Option<&Element> {
        self.elements.get(handle.0)
    }

    /// Get a style property of an element
    pub fn style(&self, handle: ElementHandle, property: &str) -> Option<&str> {
        self.element(handle)
            .and_then(|element| element.style.get(property))
            .map(String::as_str)
    }
}

impl ElementStore for Document {
    fn query_elements(&self, marker: &str) -> Vec<ElementHandle> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.attributes.contains_key(marker))
            .map(|(i, _)| ElementHandle(i))
            .collect()
    }

    fn read_attribute(&self, handle: ElementHandle, marker: &str) -> Option<String> {
        self.element(handle)
            .and_then(|element| element.attributes.get(marker))
            .cloned()
    }

    fn write_style(&mut self, handle: ElementHandle, property: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(handle.0) {
            element
                .style
                .insert(property.to_string(), value.to_string());
        }
    }
}
