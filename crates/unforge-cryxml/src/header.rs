//! CryXmlB header structure.

use unforge_common::BinaryReader;
use zerocopy::byteorder::little_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{Error, Result};

/// CryXmlB file header.
///
/// The fixed 68-byte preamble at offset 0. All table offsets are absolute
/// byte offsets from the start of the buffer. Declared counts are taken as
/// given and never cross-checked against the buffer length.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct CryXmlHeader {
    /// Must equal [`CryXmlHeader::SIGNATURE`].
    pub signature: [u8; 8],
    /// Total file size. The top two bits are reserved; see [`CryXmlHeader::file_size`].
    pub raw_file_size: U32,
    /// Position of the node table.
    pub node_table_offset: U32,
    /// Number of node records.
    pub node_count: U32,
    /// Position of the attribute table.
    pub attribute_table_offset: U32,
    /// Number of attribute records.
    pub attribute_count: U32,
    /// Position of the hierarchy (child index) table.
    pub hierarchy_table_offset: U32,
    /// Number of hierarchy entries.
    pub hierarchy_count: U32,
    /// Position of the string pool.
    pub string_pool_offset: U32,
    /// Declared size of the string pool.
    pub string_pool_count: U32,
    pub reserved1: U16,
    pub reserved2: U16,
    pub reserved_offsets: [U32; 4],
    pub reserved3: U32,
}

/// Location of one table inside the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRange {
    /// Absolute byte offset of the first record.
    pub offset: u32,
    /// Declared number of records (bytes, for the string pool).
    pub count: u32,
}

impl CryXmlHeader {
    /// The signature at the start of a CryXmlB file.
    pub const SIGNATURE: &'static [u8; 8] = b"CryXmlB\0";

    /// Size of the signature.
    pub const SIGNATURE_LEN: usize = 8;

    /// Size of the whole header, signature included.
    pub const SIZE: usize = std::mem::size_of::<CryXmlHeader>();

    /// Bits of the file-size field that carry the size.
    pub const FILE_SIZE_MASK: u32 = 0x3FFF_FFFF;

    /// Check if data starts with the CryXmlB signature.
    pub fn has_signature(data: &[u8]) -> bool {
        data.len() >= Self::SIGNATURE_LEN && &data[..Self::SIGNATURE_LEN] == Self::SIGNATURE
    }

    /// Read the header at offset 0.
    ///
    /// The signature is checked before anything else is read.
    pub fn parse(reader: &BinaryReader<'_>) -> Result<Self> {
        let data = reader.data();
        if !Self::has_signature(data) {
            return Err(Error::InvalidSignature {
                actual: data[..Self::SIGNATURE_LEN.min(data.len())].to_vec(),
            });
        }

        Ok(reader.struct_at(0)?)
    }

    /// Declared file size with the reserved top two bits cleared.
    pub fn file_size(&self) -> u32 {
        self.raw_file_size.get() & Self::FILE_SIZE_MASK
    }

    pub fn node_table(&self) -> TableRange {
        TableRange {
            offset: self.node_table_offset.get(),
            count: self.node_count.get(),
        }
    }

    pub fn attribute_table(&self) -> TableRange {
        TableRange {
            offset: self.attribute_table_offset.get(),
            count: self.attribute_count.get(),
        }
    }

    pub fn hierarchy_table(&self) -> TableRange {
        TableRange {
            offset: self.hierarchy_table_offset.get(),
            count: self.hierarchy_count.get(),
        }
    }

    pub fn string_pool(&self) -> TableRange {
        TableRange {
            offset: self.string_pool_offset.get(),
            count: self.string_pool_count.get(),
        }
    }
}
