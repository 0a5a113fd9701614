//! Random-access reader over the CryXmlB tables.

use unforge_common::BinaryReader;

use crate::strings::resolve_string;
use crate::{AttributeInfo, CryXmlAttribute, CryXmlHeader, CryXmlNode, NodeInfo, Result};

/// Stride of the hierarchy table.
const HIERARCHY_ENTRY_SIZE: usize = 4;

/// Read-only view over one CryXmlB buffer.
///
/// Every lookup is a pure function of the buffer and an absolute offset, so
/// lookups can nest freely (a node read resolves its strings, the hierarchy
/// walk reads nodes) without any shared cursor.
#[derive(Debug, Clone)]
pub struct CryXmlReader<'a> {
    reader: BinaryReader<'a>,
    header: CryXmlHeader,
}

impl<'a> CryXmlReader<'a> {
    /// Check if data is a CryXmlB file by checking the signature.
    pub fn is_cryxml(data: &[u8]) -> bool {
        CryXmlHeader::has_signature(data)
    }

    /// Validate the signature and parse the header.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let reader = BinaryReader::new(data);
        let header = CryXmlHeader::parse(&reader)?;

        tracing::debug!(
            file_size = header.file_size(),
            nodes = header.node_count.get(),
            attributes = header.attribute_count.get(),
            hierarchy = header.hierarchy_count.get(),
            string_pool = header.string_pool_count.get(),
            "parsed CryXmlB header"
        );

        Ok(Self { reader, header })
    }

    pub fn header(&self) -> &CryXmlHeader {
        &self.header
    }

    /// Resolve a string-pool offset.
    pub fn resolve_string(&self, offset: u32) -> Result<&'a str> {
        resolve_string(&self.reader, self.header.string_pool_offset.get(), offset)
    }

    /// Read node `index` from the node table and resolve its tag and value.
    pub fn read_node(&self, index: u32) -> Result<NodeInfo<'a>> {
        let offset = table_offset(self.header.node_table_offset.get(), index, CryXmlNode::SIZE);
        let record: CryXmlNode = self.reader.struct_at(offset)?;

        Ok(NodeInfo {
            index,
            tag: self.resolve_string(record.tag_string_offset.get())?,
            value: self.resolve_string(record.value_string_offset.get())?,
            attribute_count: record.attribute_count.get(),
            child_count: record.child_count.get(),
            parent_index: record.parent_index.get(),
            first_attribute_index: record.first_attribute_index.get(),
            first_child_reference: record.first_child_reference.get(),
        })
    }

    /// Read attribute `index` from the attribute table and resolve both strings.
    pub fn read_attribute(&self, index: u32) -> Result<AttributeInfo<'a>> {
        let offset = table_offset(
            self.header.attribute_table_offset.get(),
            index,
            CryXmlAttribute::SIZE,
        );
        let record: CryXmlAttribute = self.reader.struct_at(offset)?;

        Ok(AttributeInfo {
            name: self.resolve_string(record.name_string_offset.get())?,
            value: self.resolve_string(record.value_string_offset.get())?,
        })
    }

    /// Read all attributes of a node, in table order.
    pub fn read_attributes(&self, node: &NodeInfo<'_>) -> Result<Vec<AttributeInfo<'a>>> {
        node.attribute_indices()
            .map(|index| self.read_attribute(index))
            .collect()
    }

    /// Read the node index stored in hierarchy-table slot `slot`.
    pub fn child_node_index(&self, slot: u32) -> Result<u32> {
        let offset = table_offset(
            self.header.hierarchy_table_offset.get(),
            slot,
            HIERARCHY_ENTRY_SIZE,
        );
        Ok(self.reader.u32_at(offset)?)
    }

    /// Node indices of a node's children, in document order.
    ///
    /// The node's child range addresses the hierarchy table; each slot in
    /// that range holds the node-table index of one child.
    pub fn child_node_indices(&self, node: &NodeInfo<'_>) -> Result<Vec<u32>> {
        node.child_slots()
            .map(|slot| self.child_node_index(slot))
            .collect()
    }
}

/// Absolute offset of record `index` in a table of `stride`-byte records.
///
/// Saturates instead of wrapping so an absurd index becomes an
/// out-of-bounds read.
fn table_offset(base: u32, index: u32, stride: usize) -> usize {
    (base as usize).saturating_add((index as usize).saturating_mul(stride))
}
