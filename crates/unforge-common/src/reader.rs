//! Binary reader for zero-copy parsing of byte slices.
//!
//! This module provides [`BinaryReader`], a cursor-like type that efficiently
//! reads little-endian binary data from a byte slice without copying.
//!
//! Besides the usual cursor reads, the reader offers *positional* reads
//! (`*_at`) that take an absolute offset and never touch the cursor. Table
//! formats that cross-reference each other by offset are decoded with these,
//! so a lookup made in the middle of another read cannot disturb it.

use byteorder::{ByteOrder, LittleEndian};
use zerocopy::FromBytes;

use crate::{Error, Result};

/// A binary reader that provides zero-copy reading from a byte slice.
///
/// # Example
///
/// ```
/// use unforge_common::BinaryReader;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_u32().unwrap(), 0x04030201);
/// assert_eq!(reader.u32_at(0).unwrap(), 0x04030201);
/// assert_eq!(reader.read_u32().unwrap(), 0x08070605);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Create a new reader starting at a specific position.
    #[inline]
    pub const fn new_at(data: &'a [u8], position: usize) -> Self {
        Self { data, position }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the total length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Seek to an absolute position.
    #[inline]
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Advance the position by a number of bytes.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.position = self.position.saturating_add(count);
    }

    /// Get the underlying buffer.
    #[inline]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        self.bytes_at(self.position, count)
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_bytes(4).map(LittleEndian::read_u32)
    }

    /// Read a null-terminated UTF-8 string, consuming the terminator.
    pub fn read_cstring(&mut self) -> Result<&'a str> {
        let s = self.cstring_at(self.position)?;
        self.position += s.len() + 1;
        Ok(s)
    }

    /// Read a struct using zerocopy.
    ///
    /// The struct must implement `FromBytes` from the zerocopy crate.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let value = self.struct_at(self.position)?;
        self.position += std::mem::size_of::<T>();
        Ok(value)
    }

    /// Borrow `count` bytes at an absolute offset. The cursor is not moved.
    #[inline]
    pub fn bytes_at(&self, offset: usize, count: usize) -> Result<&'a [u8]> {
        let available = self.data.len().saturating_sub(offset);
        if available < count {
            return Err(Error::UnexpectedEof {
                offset,
                needed: count,
                available,
            });
        }
        Ok(&self.data[offset..offset + count])
    }

    /// Read a little-endian u32 at an absolute offset. The cursor is not moved.
    #[inline]
    pub fn u32_at(&self, offset: usize) -> Result<u32> {
        self.bytes_at(offset, 4).map(LittleEndian::read_u32)
    }

    /// Read a null-terminated UTF-8 string starting at an absolute offset.
    /// The cursor is not moved.
    ///
    /// The terminator is located with `memchr`. A string that runs to the end
    /// of the buffer without a terminator is an error.
    pub fn cstring_at(&self, offset: usize) -> Result<&'a str> {
        if offset >= self.data.len() {
            return Err(Error::UnexpectedEof {
                offset,
                needed: 1,
                available: 0,
            });
        }

        let tail = &self.data[offset..];
        let end = memchr::memchr(0, tail).ok_or(Error::MissingNullTerminator { offset })?;

        std::str::from_utf8(&tail[..end]).map_err(|source| Error::Utf8 { offset, source })
    }

    /// Read a struct at an absolute offset. The cursor is not moved.
    #[inline]
    pub fn struct_at<T: FromBytes>(&self, offset: usize) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.bytes_at(offset, size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            offset,
            needed: size,
            available: bytes.len(),
        })
    }
}
