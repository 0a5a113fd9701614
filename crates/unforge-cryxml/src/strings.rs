//! String pool lookups.

use unforge_common::BinaryReader;

use crate::Result;

/// Resolve the NUL-terminated string at `pool_base + relative_offset`.
///
/// The lookup is a positional read: the reader's cursor is never moved, so
/// it is safe to call from the middle of any other read over the same buffer.
pub fn resolve_string<'a>(
    reader: &BinaryReader<'a>,
    pool_base: u32,
    relative_offset: u32,
) -> Result<&'a str> {
    let offset = (pool_base as usize).saturating_add(relative_offset as usize);
    Ok(reader.cstring_at(offset)?)
}
