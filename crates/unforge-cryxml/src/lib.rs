//! CryXmlB binary XML decoder.
//!
//! CryEngine tooling stores many XML documents in a tokenized binary form
//! called CryXmlB: a fixed header followed by a node table, an attribute
//! table, a hierarchy table of child indices and a pool of NUL-terminated
//! strings. This crate decodes such a buffer back into a generic element
//! tree and, optionally, writes that tree out as XML or JSON text.
//!
//! # Supported File Types
//!
//! - `.mtl` - Material definitions
//! - `.cdf` - Character definitions
//! - `.chrparams` - Character parameters
//! - Some `.xml` files (the binary variant)
//!
//! # Example
//!
//! ```no_run
//! use unforge_cryxml::CryXmlReader;
//!
//! let data = std::fs::read("material.mtl")?;
//!
//! if CryXmlReader::is_cryxml(&data) {
//!     let document = unforge_cryxml::decode(&data)?;
//!     let xml_string = document.to_xml_string()?;
//!     println!("{}", xml_string);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod attribute;
mod document;
mod element;
mod error;
mod header;
mod hierarchy;
mod node;
mod reader;
mod strings;

#[cfg(feature = "json-output")]
mod json;
#[cfg(feature = "xml-output")]
mod xml;

pub use attribute::{AttributeInfo, CryXmlAttribute};
pub use document::{Descendants, Document};
pub use element::{build_element, Attribute, Element, ElementId};
pub use error::{Error, Result};
pub use header::{CryXmlHeader, TableRange};
pub use hierarchy::{build_document, decode};
#[cfg(feature = "json-output")]
pub use json::MAX_JSON_DEPTH;
pub use node::{CryXmlNode, NodeInfo};
pub use reader::CryXmlReader;
pub use strings::resolve_string;
