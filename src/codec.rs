use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;
use crate::flow::Node;
use crate::validate::{NodeIssues, validate_nodes};

/// The interchange form of a flow: an explicit start pointer plus the node
/// collection. Export always emits this shape; import additionally accepts
/// a bare node array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    #[serde(rename = "startNodeId")]
    pub start_node_id: Option<String>,
    pub nodes: Vec<Node>,
}

impl FlowDocument {
    pub fn new(start_node_id: Option<String>, nodes: Vec<Node>) -> Self {
        Self {
            start_node_id,
            nodes,
        }
    }

    /// Wraps a bare node array, inferring the first node as the start.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let start_node_id = nodes.first().map(|n| n.id.clone());
        Self {
            start_node_id,
            nodes,
        }
    }
}

/// Decodes flow JSON in either accepted shape.
///
/// Malformed JSON and a missing or empty nodes array are the only hard
/// failures; structurally invalid nodes (blank ids, dangling edges) parse
/// fine and are left to validation. The document is returned exactly as
/// written — a dangling `startNodeId` is preserved, so that
/// parse ∘ serialize round-trips.
pub fn parse_flow(text: &str) -> Result<FlowDocument, ParseError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ParseError::Json(e.to_string()))?;

    let document = if value.is_array() {
        let nodes: Vec<Node> =
            serde_json::from_value(value).map_err(|e| ParseError::Json(e.to_string()))?;
        FlowDocument::from_nodes(nodes)
    } else if value.get("nodes").is_some_and(Value::is_array) {
        serde_json::from_value(value).map_err(|e| ParseError::Json(e.to_string()))?
    } else {
        return Err(ParseError::EmptyNodes);
    };

    if document.nodes.is_empty() {
        return Err(ParseError::EmptyNodes);
    }
    Ok(document)
}

/// Encodes a document in the canonical export form: the full object shape,
/// pretty-printed.
pub fn serialize_flow(document: &FlowDocument) -> Result<String, ParseError> {
    serde_json::to_string_pretty(document).map_err(|e| ParseError::Serialize(e.to_string()))
}

/// The result of a two-phase import: parse, validate, confirm-if-imperfect.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// The document parsed and carries no structural errors; safe to load
    /// immediately.
    Clean(FlowDocument),
    /// The document parsed but carries structural errors. Surface `errors`
    /// to the user and call `into_document` only once they explicitly
    /// accept loading anyway.
    Flagged {
        document: FlowDocument,
        errors: Vec<NodeIssues>,
    },
}

impl ImportOutcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, ImportOutcome::Clean(_))
    }

    /// The pending structural errors; empty when clean.
    pub fn errors(&self) -> &[NodeIssues] {
        match self {
            ImportOutcome::Clean(_) => &[],
            ImportOutcome::Flagged { errors, .. } => errors,
        }
    }

    /// Unwraps the parsed document. For a flagged outcome this call is the
    /// explicit "load anyway" confirmation step.
    pub fn into_document(self) -> FlowDocument {
        match self {
            ImportOutcome::Clean(document) => document,
            ImportOutcome::Flagged { document, .. } => document,
        }
    }
}

/// Parses flow JSON and validates the result, without committing anything.
///
/// A flagged outcome must never be loaded silently: the caller is required
/// to surface the errors and obtain confirmation first.
pub fn import_flow(text: &str) -> Result<ImportOutcome, ParseError> {
    let document = parse_flow(text)?;
    let errors = validate_nodes(&document.nodes);
    Ok(if errors.is_empty() {
        ImportOutcome::Clean(document)
    } else {
        ImportOutcome::Flagged { document, errors }
    })
}
