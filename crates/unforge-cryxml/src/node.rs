//! CryXmlB node records.

use zerocopy::byteorder::little_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// A raw record in the node table.
///
/// Nodes are stored in a flat array and reference the other tables by index.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct CryXmlNode {
    /// Offset into the string pool for the tag name.
    pub tag_string_offset: U32,
    /// Offset into the string pool for the text value (usually empty).
    pub value_string_offset: U32,
    /// Number of attributes on this node.
    pub attribute_count: U32,
    /// Number of child nodes.
    pub child_count: U32,
    /// Parent node index. Not needed to rebuild the tree.
    pub parent_index: U32,
    /// Index of the first attribute in the attribute table.
    pub first_attribute_index: U32,
    /// Index of the first slot in the hierarchy table. This is *not* a node index.
    pub first_child_reference: U32,
}

impl CryXmlNode {
    /// Stride of the node table.
    pub const SIZE: usize = std::mem::size_of::<CryXmlNode>();
}

/// A node record with its strings resolved from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo<'a> {
    /// Position of this record in the node table.
    pub index: u32,
    pub tag: &'a str,
    pub value: &'a str,
    pub attribute_count: u32,
    pub child_count: u32,
    pub parent_index: u32,
    pub first_attribute_index: u32,
    pub first_child_reference: u32,
}

impl NodeInfo<'_> {
    /// Hierarchy-table slots holding this node's children, in document order.
    pub fn child_slots(&self) -> impl Iterator<Item = u32> {
        let first = self.first_child_reference;
        (0..self.child_count).map(move |i| first.saturating_add(i))
    }

    /// Attribute-table indices belonging to this node.
    pub fn attribute_indices(&self) -> impl Iterator<Item = u32> {
        let first = self.first_attribute_index;
        (0..self.attribute_count).map(move |i| first.saturating_add(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_size() {
        assert_eq!(CryXmlNode::SIZE, 28);
    }

    #[test]
    fn test_child_slots() {
        let node = NodeInfo {
            index: 0,
            tag: "root",
            value: "",
            attribute_count: 2,
            child_count: 3,
            parent_index: u32::MAX,
            first_attribute_index: 4,
            first_child_reference: 7,
        };

        assert_eq!(node.child_slots().collect::<Vec<_>>(), vec![7, 8, 9]);
        assert_eq!(node.attribute_indices().collect::<Vec<_>>(), vec![4, 5]);
    }
}
