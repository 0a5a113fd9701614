//! JSON output for decoded documents.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{Document, ElementId, Error, Result};

/// Deepest element nesting the JSON writers accept. The root is at depth 1.
///
/// Nested JSON is serialized recursively, so deeper trees are refused with
/// [`Error::Json`] before anything is written.
pub const MAX_JSON_DEPTH: usize = 512;

impl Document {
    /// Render the tree as pretty-printed JSON, children nested in place.
    ///
    /// Fails with [`Error::Json`] if the tree is deeper than [`MAX_JSON_DEPTH`].
    pub fn to_json_string(&self) -> Result<String> {
        self.check_json_depth()?;
        serde_json::to_string_pretty(&self.nested(self.root_id()))
            .map_err(|e| Error::Json(e.to_string()))
    }

    /// Write the tree as JSON to a writer.
    ///
    /// Fails with [`Error::Json`] if the tree is deeper than [`MAX_JSON_DEPTH`].
    pub fn write_json<W: std::io::Write>(&self, writer: W) -> Result<()> {
        self.check_json_depth()?;
        serde_json::to_writer_pretty(writer, &self.nested(self.root_id()))
            .map_err(|e| Error::Json(e.to_string()))
    }

    fn nested(&self, id: ElementId) -> Nested<'_> {
        Nested { document: self, id }
    }

    fn check_json_depth(&self) -> Result<()> {
        let mut stack = vec![(self.root_id(), 1usize)];
        while let Some((id, depth)) = stack.pop() {
            if depth > MAX_JSON_DEPTH {
                return Err(Error::Json(format!(
                    "element nesting exceeds {MAX_JSON_DEPTH} levels"
                )));
            }
            stack.extend(self[id].children.iter().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}

/// Serializes an arena element with its children inlined.
struct Nested<'a> {
    document: &'a Document,
    id: ElementId,
}

impl Serialize for Nested<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let element = &self.document[self.id];
        let mut state = serializer.serialize_struct("Element", 5)?;
        if element.namespace.is_empty() {
            state.skip_field("namespace")?;
        } else {
            state.serialize_field("namespace", &element.namespace)?;
        }
        state.serialize_field("name", &element.name)?;
        state.serialize_field("attributes", &element.attributes)?;
        state.serialize_field("text", &element.text)?;
        let children: Vec<_> = element
            .children
            .iter()
            .map(|&id| self.document.nested(id))
            .collect();
        state.serialize_field("children", &children)?;
        state.end()
    }
}
