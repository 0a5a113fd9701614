//! XML text output for decoded documents.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::{Document, ElementId, Error, Result};

impl Document {
    /// Convert to an XML string.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut output = Vec::new();
        self.write_xml(&mut output)?;
        String::from_utf8(output).map_err(|e| Error::Xml(e.to_string()))
    }

    /// Write XML to a writer.
    ///
    /// The output starts with a UTF-8 standalone declaration and is indented
    /// by two spaces. An element carries `xmlns` when its namespace differs
    /// from its parent's; namespaced attributes are written `prefix:local`.
    pub fn write_xml<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml_writer = Writer::new_with_indent(writer, b' ', 2);

        xml_writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), Some("yes"))))
            .map_err(|e| Error::Xml(e.to_string()))?;

        // Open elements, as (id, next child) frames.
        let root = self.root_id();
        let mut stack = Vec::new();
        if self.write_start(&mut xml_writer, root, "")? {
            stack.push((root, 0usize));
        }

        while let Some((id, next)) = stack.last_mut() {
            let element = &self[*id];
            match element.children.get(*next) {
                Some(&child) => {
                    *next += 1;
                    if self.write_start(&mut xml_writer, child, &element.namespace)? {
                        stack.push((child, 0));
                    }
                }
                None => {
                    xml_writer
                        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
                        .map_err(|e| Error::Xml(e.to_string()))?;
                    stack.pop();
                }
            }
        }

        Ok(())
    }

    /// Write an element's opening tag and text.
    ///
    /// Returns `false` when the element was written self-closing and needs
    /// no end tag.
    fn write_start<W: Write>(
        &self,
        writer: &mut Writer<W>,
        id: ElementId,
        namespace_in_scope: &str,
    ) -> Result<bool> {
        let element = &self[id];

        let mut start = BytesStart::new(element.name.as_str());
        if element.namespace != namespace_in_scope {
            start.push_attribute(("xmlns", element.namespace.as_str()));
        }
        for attr in &element.attributes {
            let name = attr.qualified_name();
            start.push_attribute((name.as_str(), attr.value.as_str()));
        }

        if element.text.is_none() && element.children.is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(|e| Error::Xml(e.to_string()))?;
            return Ok(false);
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| Error::Xml(e.to_string()))?;

        if let Some(text) = &element.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| Error::Xml(e.to_string()))?;
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Attribute, Document, Element};

    fn document() -> Document {
        let mut doc = Document::with_root(Element {
            namespace: "urn:x".into(),
            name: "root".into(),
            attributes: vec![Attribute::new("id", "5")],
            ..Default::default()
        });
        doc.push_child(
            doc.root_id(),
            Element {
                namespace: "urn:x".into(),
                name: "entry".into(),
                text: Some("a < b & c".into()),
                ..Default::default()
            },
        );
        doc.push_child(
            doc.root_id(),
            Element {
                name: "child".into(),
                attributes: vec![Attribute::namespaced("ns", "attr", "v")],
                ..Default::default()
            },
        );
        doc
    }

    #[test]
    fn test_declaration() {
        let xml = document().to_xml_string().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#));
    }

    #[test]
    fn test_elements_and_namespaces() {
        let xml = document().to_xml_string().unwrap();

        assert!(xml.contains(r#"<root xmlns="urn:x" id="5">"#));
        // Same namespace as the parent: no redeclaration.
        assert!(xml.contains("<entry>a &lt; b &amp; c</entry>"));
        // Back to the empty namespace, with a prefixed attribute.
        assert!(xml.contains(r#"<child xmlns="" ns:attr="v"/>"#));
        assert!(xml.trim_end().ends_with("</root>"));
    }

    #[test]
    fn test_end_tags_close_in_order() {
        let mut doc = Document::with_root(Element {
            name: "root".into(),
            ..Default::default()
        });
        let a = doc.push_child(
            doc.root_id(),
            Element {
                name: "a".into(),
                ..Default::default()
            },
        );
        doc.push_child(
            a,
            Element {
                name: "b".into(),
                ..Default::default()
            },
        );
        doc.push_child(
            doc.root_id(),
            Element {
                name: "c".into(),
                ..Default::default()
            },
        );

        let xml = doc.to_xml_string().unwrap();
        let order: Vec<_> = ["<root>", "<a>", "<b/>", "</a>", "<c/>", "</root>"]
            .iter()
            .map(|tag| xml.find(tag).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{xml}");
    }

    #[test]
    fn test_lone_root_is_self_closing() {
        let doc = Document::with_root(Element {
            name: "root".into(),
            ..Default::default()
        });
        let xml = doc.to_xml_string().unwrap();
        assert!(xml.trim_end().ends_with("<root/>"));
        assert!(!xml.contains("xmlns"));
    }
}
