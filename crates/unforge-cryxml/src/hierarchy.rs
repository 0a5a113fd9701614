//! Breadth-first reconstruction of the element tree.

use std::collections::VecDeque;

use crate::{build_element, CryXmlReader, Document, Element, ElementId, NodeInfo, Result};

/// Decode a CryXmlB buffer into a [`Document`].
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("material.mtl")?;
///
/// if unforge_cryxml::CryXmlReader::is_cryxml(&data) {
///     let document = unforge_cryxml::decode(&data)?;
///     println!("<{}> with {} elements", document.root().name, document.element_count());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode(data: &[u8]) -> Result<Document> {
    let reader = CryXmlReader::new(data)?;
    build_document(&reader)
}

/// Rebuild the tree rooted at node 0.
///
/// Nodes are visited breadth first. A node's children are the hierarchy
/// slots `[first_child_reference, first_child_reference + child_count)`,
/// and each slot holds a node-table index; children are appended in slot
/// order, which is document order.
///
/// The hierarchy table is trusted: there is no guard against a slot that
/// points back up the tree. Out-of-range slots and indices fail as reads.
pub fn build_document(reader: &CryXmlReader<'_>) -> Result<Document> {
    let root = reader.read_node(0)?;
    let mut document = Document::with_root(element_for(reader, &root)?);

    let mut queue: VecDeque<(NodeInfo<'_>, ElementId)> = VecDeque::new();
    if root.child_count > 0 {
        queue.push_back((root, document.root_id()));
    }

    while let Some((node, parent)) = queue.pop_front() {
        for slot in node.child_slots() {
            let child_index = reader.child_node_index(slot)?;
            let child = reader.read_node(child_index)?;

            tracing::trace!(
                parent = node.index,
                slot,
                node = child_index,
                tag = child.tag,
                "decoded child node"
            );

            let id = document.push_child(parent, element_for(reader, &child)?);
            if child.child_count > 0 {
                queue.push_back((child, id));
            }
        }
    }

    tracing::debug!(
        elements = document.element_count(),
        root = %document.root().name,
        "decoded CryXmlB document"
    );

    Ok(document)
}

fn element_for(reader: &CryXmlReader<'_>, node: &NodeInfo<'_>) -> Result<Element> {
    let attributes = reader.read_attributes(node)?;
    Ok(build_element(node, &attributes))
}
