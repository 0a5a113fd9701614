//! Arena-backed document holding the decoded element tree.

use std::ops::Index;

use crate::{Element, ElementId};

/// A decoded CryXmlB document.
///
/// Elements live in an append-only arena in the order the decoder built
/// them (breadth first). Each element lists its children by [`ElementId`];
/// there are no parent links. The root is always the first element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub(crate) fn with_root(root: Element) -> Self {
        Self {
            elements: vec![root],
        }
    }

    /// Append `element` as the last child of `parent`.
    pub(crate) fn push_child(&mut self, parent: ElementId, element: Element) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(element);
        self.elements[parent.index()].children.push(id);
        id
    }

    pub fn root_id(&self) -> ElementId {
        ElementId(0)
    }

    pub fn root(&self) -> &Element {
        &self.elements[0]
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Total number of elements in the tree.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Direct children of an element, in document order.
    pub fn children(&self, id: ElementId) -> impl Iterator<Item = &Element> + '_ {
        self[id].children.iter().map(move |&child| &self[child])
    }

    /// An element and all of its descendants, in document order (depth first).
    pub fn descendants(&self, id: ElementId) -> Descendants<'_> {
        Descendants {
            document: self,
            stack: vec![id],
        }
    }

    /// Every element in document order.
    pub fn iter(&self) -> Descendants<'_> {
        self.descendants(self.root_id())
    }
}

impl Index<ElementId> for Document {
    type Output = Element;

    fn index(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }
}

/// Depth-first iterator over a subtree. See [`Document::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<ElementId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (ElementId, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let element = &self.document[id];
        self.stack.extend(element.children.iter().rev().copied());
        Some((id, element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Element {
        Element {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_push_and_walk() {
        let mut doc = Document::with_root(named("root"));
        let a = doc.push_child(doc.root_id(), named("a"));
        let b = doc.push_child(doc.root_id(), named("b"));
        doc.push_child(a, named("a1"));
        doc.push_child(b, named("b1"));

        assert_eq!(doc.element_count(), 5);
        assert_eq!(doc.root().name, "root");

        let children: Vec<_> = doc.children(doc.root_id()).map(|e| e.name.as_str()).collect();
        assert_eq!(children, ["a", "b"]);

        let order: Vec<_> = doc.iter().map(|(_, e)| e.name.as_str()).collect();
        assert_eq!(order, ["root", "a", "a1", "b", "b1"]);

        let subtree: Vec<_> = doc.descendants(b).map(|(_, e)| e.name.as_str()).collect();
        assert_eq!(subtree, ["b", "b1"]);
    }

    #[test]
    fn test_get_out_of_range() {
        let doc = Document::with_root(named("root"));
        assert!(doc.get(ElementId(1)).is_none());
        assert_eq!(doc.get(ElementId(0)).map(|e| e.name.as_str()), Some("root"));
    }
}
