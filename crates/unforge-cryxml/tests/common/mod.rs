//! Test-only writer for CryXmlB buffers.
//!
//! Layout: Header | Nodes | Attributes | Hierarchy | StringPool.
//! Nodes and hierarchy slots are placed explicitly so tests can describe
//! any table shape, including children stored out of index order.

#![allow(dead_code)]

use std::collections::HashMap;

pub const HEADER_SIZE: u32 = 68;
const NODE_SIZE: u32 = 28;
const ATTRIBUTE_SIZE: u32 = 8;

#[derive(Debug, Clone, Copy, Default)]
struct RawNode {
    tag: u32,
    value: u32,
    attribute_count: u32,
    child_count: u32,
    parent_index: u32,
    first_attribute_index: u32,
    first_child_reference: u32,
}

#[derive(Debug, Default)]
pub struct Fixture {
    strings: StringPool,
    nodes: Vec<RawNode>,
    attributes: Vec<(u32, u32)>,
    hierarchy: Vec<u32>,
    file_size_flags: u32,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of `s` in the pool, adding it if needed.
    pub fn string(&mut self, s: &str) -> u32 {
        self.strings.add(s)
    }

    /// Append a node with the given attributes and no children. Returns its index.
    pub fn node(&mut self, tag: &str, value: &str, attributes: &[(&str, &str)]) -> u32 {
        let index = self.nodes.len() as u32;
        let first_attribute_index = self.attributes.len() as u32;

        for (name, val) in attributes {
            let name = self.strings.add(name);
            let val = self.strings.add(val);
            self.attributes.push((name, val));
        }

        let node = RawNode {
            tag: self.strings.add(tag),
            value: self.strings.add(value),
            attribute_count: attributes.len() as u32,
            parent_index: u32::MAX,
            first_attribute_index,
            ..Default::default()
        };
        self.nodes.push(node);
        index
    }

    /// Store `children` as the next run of hierarchy slots and point `parent` at it.
    pub fn children(&mut self, parent: u32, children: &[u32]) -> &mut Self {
        let first = self.hierarchy.len() as u32;
        self.hierarchy.extend_from_slice(children);

        let node = &mut self.nodes[parent as usize];
        node.first_child_reference = first;
        node.child_count = children.len() as u32;

        for &child in children {
            self.nodes[child as usize].parent_index = parent;
        }
        self
    }

    /// Append a raw hierarchy slot without attaching it to any node.
    pub fn raw_slot(&mut self, node_index: u32) -> u32 {
        self.hierarchy.push(node_index);
        self.hierarchy.len() as u32 - 1
    }

    /// Overwrite a node's child range verbatim.
    pub fn child_range(&mut self, node: u32, first_child_reference: u32, child_count: u32) {
        let node = &mut self.nodes[node as usize];
        node.first_child_reference = first_child_reference;
        node.child_count = child_count;
    }

    /// Set the reserved top bits of the file-size field.
    pub fn file_size_flags(&mut self, flags: u32) {
        self.file_size_flags = flags;
    }

    pub fn node_table_offset(&self) -> u32 {
        HEADER_SIZE
    }

    pub fn attribute_table_offset(&self) -> u32 {
        self.node_table_offset() + self.nodes.len() as u32 * NODE_SIZE
    }

    pub fn hierarchy_table_offset(&self) -> u32 {
        self.attribute_table_offset() + self.attributes.len() as u32 * ATTRIBUTE_SIZE
    }

    pub fn string_pool_offset(&self) -> u32 {
        self.hierarchy_table_offset() + self.hierarchy.len() as u32 * 4
    }

    pub fn build(&self) -> Vec<u8> {
        let pool = self.strings.bytes();
        let total = self.string_pool_offset() + pool.len() as u32;

        let mut out = Vec::with_capacity(total as usize);
        out.extend_from_slice(b"CryXmlB\0");
        for value in [
            total | self.file_size_flags,
            self.node_table_offset(),
            self.nodes.len() as u32,
            self.attribute_table_offset(),
            self.attributes.len() as u32,
            self.hierarchy_table_offset(),
            self.hierarchy.len() as u32,
            self.string_pool_offset(),
            pool.len() as u32,
        ] {
            out.extend_from_slice(&value.to_le_bytes());
        }
        // reserved1, reserved2, four reserved offsets, reserved3
        out.resize(HEADER_SIZE as usize, 0);

        for node in &self.nodes {
            for value in [
                node.tag,
                node.value,
                node.attribute_count,
                node.child_count,
                node.parent_index,
                node.first_attribute_index,
                node.first_child_reference,
            ] {
                out.extend_from_slice(&value.to_le_bytes());
            }
        }

        for (name, value) in &self.attributes {
            out.extend_from_slice(&name.to_le_bytes());
            out.extend_from_slice(&value.to_le_bytes());
        }

        for index in &self.hierarchy {
            out.extend_from_slice(&index.to_le_bytes());
        }

        out.extend_from_slice(pool);
        out
    }
}

/// Deduplicating pool of NUL-terminated strings.
#[derive(Debug, Default)]
struct StringPool {
    bytes: Vec<u8>,
    offsets: HashMap<String, u32>,
}

impl StringPool {
    fn add(&mut self, s: &str) -> u32 {
        if let Some(&offset) = self.offsets.get(s) {
            return offset;
        }
        let offset = self.bytes.len() as u32;
        self.bytes.extend_from_slice(s.as_bytes());
        self.bytes.push(0);
        self.offsets.insert(s.to_string(), offset);
        offset
    }

    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
