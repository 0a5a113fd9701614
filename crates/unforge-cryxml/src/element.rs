//! Generic element tree produced by the decoder.

use crate::{AttributeInfo, NodeInfo};

/// Index of an element inside a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    /// Position of the element in document arena order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An attribute on a decoded element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-output", derive(serde::Serialize))]
pub struct Attribute {
    /// Namespace identifier. This is the literal prefix of a `prefix:local`
    /// name; it is not resolved against any `xmlns:prefix` declaration.
    #[cfg_attr(
        feature = "json-output",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub namespace: Option<String>,
    /// Local name.
    pub name: String,
    pub value: String,
}

impl Attribute {
    /// An attribute without a namespace.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
            value: value.into(),
        }
    }

    /// An attribute in the namespace named by `namespace`.
    pub fn namespaced(
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
            value: value.into(),
        }
    }

    /// `prefix:local` for namespaced attributes, `local` otherwise.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}:{}", namespace, self.name),
            None => self.name.clone(),
        }
    }
}

/// One element of the decoded tree.
///
/// Children are stored as ids into the owning document's arena.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Default namespace, empty when the element carried no `xmlns` attribute.
    pub namespace: String,
    /// Local name, taken verbatim from the node's tag.
    pub name: String,
    pub attributes: Vec<Attribute>,
    /// Text content. `None` when the node's value string is empty.
    pub text: Option<String>,
    pub children: Vec<ElementId>,
}

impl Element {
    /// Find an attribute by local name, ignoring namespaces.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Turn a resolved node and its resolved attributes into an element.
///
/// - `xmlns` sets the element's default namespace and is not kept as an
///   attribute. When it appears more than once the last one wins.
/// - `prefix:local` becomes an attribute in namespace `prefix`, split at the
///   first colon.
/// - Anything else is kept as a plain attribute.
/// - An empty value string produces no text.
pub fn build_element(node: &NodeInfo<'_>, attributes: &[AttributeInfo<'_>]) -> Element {
    let mut namespace = String::new();
    let mut attrs = Vec::with_capacity(attributes.len());

    for attr in attributes {
        if attr.name == "xmlns" {
            namespace = attr.value.to_owned();
            continue;
        }

        match attr.name.split_once(':') {
            Some((prefix, local)) => attrs.push(Attribute::namespaced(prefix, local, attr.value)),
            None => attrs.push(Attribute::new(attr.name, attr.value)),
        }
    }

    Element {
        namespace,
        name: node.tag.to_owned(),
        attributes: attrs,
        text: (!node.value.is_empty()).then(|| node.value.to_owned()),
        children: Vec::new(),
    }
}
