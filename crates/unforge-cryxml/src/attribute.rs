//! CryXmlB attribute records.

use zerocopy::byteorder::little_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// A raw record in the attribute table.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct CryXmlAttribute {
    /// Offset into the string pool for the attribute name.
    pub name_string_offset: U32,
    /// Offset into the string pool for the attribute value.
    pub value_string_offset: U32,
}

impl CryXmlAttribute {
    /// Stride of the attribute table.
    pub const SIZE: usize = std::mem::size_of::<CryXmlAttribute>();
}

/// An attribute with its name and value resolved from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeInfo<'a> {
    pub name: &'a str,
    pub value: &'a str,
}
