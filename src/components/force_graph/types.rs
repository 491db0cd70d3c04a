//! Input document model for the graph visualization.
//!
//! Mirrors the shape of `graphData.json`: a `nodes` array of records with an
//! identifier and a nested `data.response` display string, and a `links`
//! array of identifier pairs.

use std::fmt;

use serde::Deserialize;

/// A node identifier. The document may key nodes with JSON numbers or
/// strings, so both forms deserialize; two identifiers are equal only if
/// they have the same form and value.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum NodeId {
	/// Integer identifier (`"id": 1`).
	Int(i64),
	/// String identifier (`"id": "a"`).
	Str(String),
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NodeId::Int(n) => write!(f, "{n}"),
			NodeId::Str(s) => write!(f, "{s}"),
		}
	}
}

/// Nested payload of a node record. Only `response` is consumed; it becomes
/// the node's display label.
#[derive(Clone, Debug, Deserialize)]
pub struct NodePayload {
	/// Display label for the node.
	pub response: String,
}

/// A node record: identifier plus nested display data.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: NodeId,
	/// Nested record carrying the display label.
	pub data: NodePayload,
}

/// An undirected link between two node identifiers. No weight, no direction,
/// no attributes.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphLink {
	/// One endpoint's node ID.
	pub source: NodeId,
	/// The other endpoint's node ID.
	pub target: NodeId,
}

/// Complete graph document: nodes and links.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	/// All node records.
	pub nodes: Vec<GraphNode>,
	/// All link records.
	pub links: Vec<GraphLink>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_minimal_document() {
		let data: GraphData = serde_json::from_str(
			r#"{"nodes":[{"id":1,"data":{"response":"A"}},{"id":2,"data":{"response":"B"}}],
			    "links":[{"source":1,"target":2}]}"#,
		)
		.unwrap();

		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.links.len(), 1);
		assert_eq!(data.nodes[0].id, NodeId::Int(1));
		assert_eq!(data.nodes[0].data.response, "A");
		assert_eq!(data.nodes[1].data.response, "B");
		assert_eq!(data.links[0].source, NodeId::Int(1));
		assert_eq!(data.links[0].target, NodeId::Int(2));
	}

	#[test]
	fn parses_string_identifiers() {
		let data: GraphData = serde_json::from_str(
			r#"{"nodes":[{"id":"root","data":{"response":"Root"}}],"links":[]}"#,
		)
		.unwrap();

		assert_eq!(data.nodes[0].id, NodeId::Str("root".into()));
	}

	#[test]
	fn integer_and_string_identifiers_are_distinct() {
		assert_ne!(NodeId::Int(1), NodeId::Str("1".into()));
	}

	#[test]
	fn ignores_extra_record_fields() {
		let data: GraphData = serde_json::from_str(
			r#"{"nodes":[{"id":1,"data":{"response":"A","model":"x"},"depth":3}],
			    "links":[]}"#,
		)
		.unwrap();

		assert_eq!(data.nodes[0].data.response, "A");
	}

	#[test]
	fn rejects_malformed_document() {
		assert!(serde_json::from_str::<GraphData>(r#"{"nodes": 3}"#).is_err());
		assert!(serde_json::from_str::<GraphData>("not json").is_err());
	}

	#[test]
	fn node_id_display() {
		assert_eq!(NodeId::Int(7).to_string(), "7");
		assert_eq!(NodeId::Str("branch-2".into()).to_string(), "branch-2");
	}
}
