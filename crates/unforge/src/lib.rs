//! unforge - CryXmlB decoding library.
//!
//! This crate provides a unified interface to the unforge library crates.
//!
//! # Crates
//!
//! - [`unforge_common`] - Common utilities (bounded binary reading)
//! - [`unforge_cryxml`] - CryXmlB decoding into an element tree, XML/JSON output
//!
//! # Example
//!
//! ```no_run
//! use unforge::prelude::*;
//!
//! let data = std::fs::read("objects.xml")?;
//! if CryXmlReader::is_cryxml(&data) {
//!     let document = decode(&data)?;
//!     println!("{}", document.to_xml_string()?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use unforge_common as common;
pub use unforge_cryxml as cryxml;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use unforge_common::BinaryReader;
    pub use unforge_cryxml::{decode, Attribute, CryXmlReader, Document, Element, ElementId};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
