//! GEXF (graph-exchange XML) rendering of a variable graph.
//!
//! The attribute schema is taken from the metadata of the first variable
//! node only. A field missing from that node is left out of the whole
//! document, even if later nodes carry it; nodes lacking a schema field
//! get the value `none`.
//!
//! Node ids are labels with spaces replaced by underscores. Two labels that
//! differ only in spaces vs underscores end up with the same id.
//!
//! Line feeds, carriage returns and tabs in attribute values are written as
//! character references; a conforming reader would otherwise normalise them
//! to spaces.

use std::borrow::Cow;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Writer;

use crate::data::MetadataField;
use crate::error::MipViewError;
use crate::report::Graph;
use crate::Result;

pub const GEXF_NAMESPACE: &str = "http://www.gexf.net/1.3";
pub const GEXF_VERSION: &str = "1.3";

fn xml_err(e: impl std::fmt::Display) -> MipViewError {
    MipViewError::Xml(e.to_string())
}

/// Escape an attribute value, including whitespace that attribute-value
/// normalisation would otherwise flatten.
pub fn escape_attribute_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#09;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Attribute whose value is already escaped, so quick-xml writes it as-is.
fn text_attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escape_attribute_value(value).into_bytes()),
    }
}

/// Node id for a label.
pub fn node_id(label: &str) -> String {
    label.replace(' ', "_")
}

/// Attribute schema: the metadata fields of the first variable node.
pub fn attribute_schema(graph: &Graph) -> Result<Vec<MetadataField>> {
    let first = graph.first_variable().ok_or(MipViewError::EmptyGraph)?;
    Ok(first
        .metadata
        .as_ref()
        .map(|m| m.iter().map(|(field, _)| *field).collect())
        .unwrap_or_default())
}

/// Render the graph as a GEXF 1.3 document.
pub fn render_gexf(graph: &Graph) -> Result<String> {
    let schema = attribute_schema(graph)?;
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(xml_err)?;

    let mut gexf = BytesStart::new("gexf");
    gexf.push_attribute(("xmlns", GEXF_NAMESPACE));
    gexf.push_attribute(("version", GEXF_VERSION));
    writer.write_event(Event::Start(gexf)).map_err(xml_err)?;

    // Edges are undirected; the declared default is kept for consumers
    // that expect it.
    let mut graph_elem = BytesStart::new("graph");
    graph_elem.push_attribute(("mode", "static"));
    graph_elem.push_attribute(("defaultedgetype", "directed"));
    writer.write_event(Event::Start(graph_elem)).map_err(xml_err)?;

    let mut attributes = BytesStart::new("attributes");
    attributes.push_attribute(("mode", "static"));
    writer.write_event(Event::Start(attributes)).map_err(xml_err)?;
    for (i, field) in schema.iter().enumerate() {
        let id = i.to_string();
        let mut attribute = BytesStart::new("attribute");
        attribute.push_attribute(("id", id.as_str()));
        attribute.push_attribute(("title", field.title()));
        attribute.push_attribute(("type", "string"));
        writer.write_event(Event::Empty(attribute)).map_err(xml_err)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("attributes")))
        .map_err(xml_err)?;

    for node in graph.nodes() {
        let id = node_id(&node.label);
        let mut node_elem = BytesStart::new("node");
        node_elem.push_attribute(text_attribute("id", &id));
        node_elem.push_attribute(text_attribute("label", &node.label));

        if node.metadata.is_none() {
            writer.write_event(Event::Empty(node_elem)).map_err(xml_err)?;
            continue;
        }

        writer.write_event(Event::Start(node_elem)).map_err(xml_err)?;
        writer
            .write_event(Event::Start(BytesStart::new("attvalues")))
            .map_err(xml_err)?;
        for (i, field) in schema.iter().enumerate() {
            let index = i.to_string();
            let value = node.metadata_value(*field).unwrap_or("none");
            let mut attvalue = BytesStart::new("attvalue");
            attvalue.push_attribute(("for", index.as_str()));
            attvalue.push_attribute(text_attribute("value", value));
            writer.write_event(Event::Empty(attvalue)).map_err(xml_err)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("attvalues")))
            .map_err(xml_err)?;
        writer
            .write_event(Event::End(BytesEnd::new("node")))
            .map_err(xml_err)?;
    }

    for (source, target) in graph.edges() {
        let source = node_id(&graph.node(source).label);
        let target = node_id(&graph.node(target).label);
        let mut edge = BytesStart::new("edge");
        edge.push_attribute(text_attribute("source", &source));
        edge.push_attribute(text_attribute("target", &target));
        writer.write_event(Event::Empty(edge)).map_err(xml_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("graph")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("gexf")))
        .map_err(xml_err)?;

    let mut document = String::from_utf8(writer.into_inner()).map_err(xml_err)?;
    document.push('\n');
    Ok(document)
}
