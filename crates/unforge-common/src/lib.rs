//! Common utilities for unforge.
//!
//! This crate provides the foundational pieces shared by the unforge crates:
//!
//! - [`BinaryReader`] - Zero-copy, bounds-checked little-endian reading from byte slices
//! - [`Error`] - The read fault type every decoder builds on

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Re-export memchr for SIMD-accelerated byte searching
pub use memchr;
