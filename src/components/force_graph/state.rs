//! Graph construction, layout settling, and view state.
//!
//! Wraps the `force_graph` physics simulation. The simulation is stepped a
//! fixed number of iterations when the state is built; positions are never
//! mutated after that. The animation loop only redraws the settled layout
//! under the current pan/zoom transform.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::info;

use super::types::{GraphData, NodeId};

/// Iteration bound for the settle pass.
const SETTLE_ITERATIONS: usize = 300;
/// Simulation time step per settle iteration, in seconds.
const SETTLE_DT: f32 = 0.016;
/// Screen-pixel padding kept around the settled layout when framing it.
const FIT_MARGIN: f64 = 40.0;
/// Zoom factor bounds, shared by fit-to-view and the wheel handler.
pub const ZOOM_RANGE: (f64, f64) = (0.1, 10.0);

/// Error raised while turning a parsed document into a graph.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphDataError {
	/// A link references an identifier with no matching node record.
	UnknownEndpoint {
		/// The identifier the link named.
		id: NodeId,
	},
}

impl fmt::Display for GraphDataError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GraphDataError::UnknownEndpoint { id } => {
				write!(f, "link endpoint {id} does not match any node record")
			}
		}
	}
}

impl std::error::Error for GraphDataError {}

/// Display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// The node's display label (the record's `data.response`).
	pub label: String,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	/// Horizontal translation in screen pixels.
	pub x: f64,
	/// Vertical translation in screen pixels.
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to [`ZOOM_RANGE`]).
	pub k: f64,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// Whether a pan drag is active.
	pub active: bool,
	/// Cursor position at drag start.
	pub start_x: f64,
	/// Cursor position at drag start.
	pub start_y: f64,
	/// View translation at drag start.
	pub transform_start_x: f64,
	/// View translation at drag start.
	pub transform_start_y: f64,
}

/// The built graph plus view state: one simulation node per input record,
/// one edge per link, with the layout settled at construction time.
pub struct GraphState {
	/// The force simulation holding the settled positions.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Current pan/zoom transform.
	pub transform: ViewTransform,
	/// In-progress pan drag, if any.
	pub pan: PanState,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	id_to_idx: HashMap<NodeId, DefaultNodeIdx>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl GraphState {
	/// Build the graph from a parsed document, run the layout to its
	/// iteration bound, and frame it inside a `width` x `height` canvas.
	///
	/// Fails if any link endpoint does not name a declared node. Duplicate
	/// links are passed through to the simulation untouched; self-loops are
	/// accepted and counted but contribute no force.
	pub fn new(data: &GraphData, width: f64, height: f64) -> Result<Self, GraphDataError> {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		// Seed nodes on a circle around the canvas center so the simulation
		// starts from distinct positions.
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.data.response.clone(),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			let src = *id_to_idx
				.get(&link.source)
				.ok_or_else(|| GraphDataError::UnknownEndpoint {
					id: link.source.clone(),
				})?;
			let tgt = *id_to_idx
				.get(&link.target)
				.ok_or_else(|| GraphDataError::UnknownEndpoint {
					id: link.target.clone(),
				})?;
			// Self-loops stay in `edges` for counting but are kept out of
			// the simulation: update() cannot borrow the same node twice,
			// and a zero-length spring exerts no force.
			if src != tgt {
				graph.add_edge(src, tgt, EdgeData::default());
			}
			edges.push((src, tgt));
		}

		let mut state = Self {
			graph,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			pan: PanState::default(),
			width,
			height,
			id_to_idx,
			edges,
		};
		state.settle();
		state.fit_to_view();
		Ok(state)
	}

	/// Step the simulation to its iteration bound. Positions are not touched
	/// again after this returns.
	fn settle(&mut self) {
		for _ in 0..SETTLE_ITERATIONS {
			self.graph.update(SETTLE_DT);
		}
		info!(
			"layout settled: {} nodes, {} edges, {} iterations",
			self.node_count(),
			self.edges.len(),
			SETTLE_ITERATIONS
		);
	}

	/// Frame the settled layout inside the canvas, centered, with a fixed
	/// pixel margin. No-op if the layout has no finite coordinates.
	pub fn fit_to_view(&mut self) {
		let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
		let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
		self.graph.visit_nodes(|node| {
			let (x, y) = (node.x() as f64, node.y() as f64);
			min_x = min_x.min(x);
			min_y = min_y.min(y);
			max_x = max_x.max(x);
			max_y = max_y.max(y);
		});
		if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
			return;
		}

		let (cx, cy) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
		let (span_x, span_y) = ((max_x - min_x).max(1.0), (max_y - min_y).max(1.0));
		let k = ((self.width - 2.0 * FIT_MARGIN) / span_x)
			.min((self.height - 2.0 * FIT_MARGIN) / span_y)
			.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1);

		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	/// Number of vertices in the graph.
	pub fn node_count(&self) -> usize {
		let mut count = 0;
		self.graph.visit_nodes(|_| count += 1);
		count
	}

	/// Number of edges in the graph, duplicates and self-loops included.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Whether an identifier names a vertex.
	pub fn contains(&self, id: &NodeId) -> bool {
		self.id_to_idx.contains_key(id)
	}

	/// The display label of the vertex with this identifier.
	pub fn label_of(&self, id: &NodeId) -> Option<String> {
		let idx = *self.id_to_idx.get(id)?;
		let mut label = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				label = Some(node.data.user_data.label.clone());
			}
		});
		label
	}

	/// The settled position of the vertex with this identifier.
	pub fn position_of(&self, id: &NodeId) -> Option<(f32, f32)> {
		let idx = *self.id_to_idx.get(id)?;
		let mut pos = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = Some((node.x(), node.y()));
			}
		});
		pos
	}

	/// Edge endpoint indices, in insertion order.
	pub fn edge_endpoints(&self) -> &[(DefaultNodeIdx, DefaultNodeIdx)] {
		&self.edges
	}

	/// Update the canvas dimensions. Keeps the current view transform.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn document(json: &str) -> GraphData {
		serde_json::from_str(json).unwrap()
	}

	fn sample() -> GraphData {
		document(
			r#"{"nodes":[
				{"id":1,"data":{"response":"Root"}},
				{"id":2,"data":{"response":"Left"}},
				{"id":3,"data":{"response":"Right"}},
				{"id":4,"data":{"response":"Leaf"}}],
			"links":[
				{"source":1,"target":2},
				{"source":1,"target":3},
				{"source":3,"target":4}]}"#,
		)
	}

	#[test]
	fn builds_one_vertex_per_record_and_one_edge_per_link() {
		let state = GraphState::new(&sample(), 800.0, 600.0).unwrap();
		assert_eq!(state.node_count(), 4);
		assert_eq!(state.edge_count(), 3);
	}

	#[test]
	fn labels_come_from_response_field() {
		let state = GraphState::new(&sample(), 800.0, 600.0).unwrap();
		assert_eq!(state.label_of(&NodeId::Int(1)).as_deref(), Some("Root"));
		assert_eq!(state.label_of(&NodeId::Int(4)).as_deref(), Some("Leaf"));
		assert_eq!(state.label_of(&NodeId::Int(9)), None);
	}

	#[test]
	fn unknown_link_endpoint_is_an_error() {
		let data = document(
			r#"{"nodes":[{"id":1,"data":{"response":"A"}}],
			"links":[{"source":1,"target":99}]}"#,
		);
		let err = match GraphState::new(&data, 800.0, 600.0) {
			Ok(_) => panic!("expected the unknown endpoint to be rejected"),
			Err(e) => e,
		};
		assert_eq!(
			err,
			GraphDataError::UnknownEndpoint {
				id: NodeId::Int(99)
			}
		);
		assert!(err.to_string().contains("99"));
	}

	#[test]
	fn duplicate_links_and_self_loops_pass_through() {
		let data = document(
			r#"{"nodes":[{"id":1,"data":{"response":"A"}},{"id":2,"data":{"response":"B"}}],
			"links":[
				{"source":1,"target":2},
				{"source":2,"target":1},
				{"source":1,"target":1}]}"#,
		);
		let state = GraphState::new(&data, 800.0, 600.0).unwrap();
		assert_eq!(state.node_count(), 2);
		assert_eq!(state.edge_count(), 3);

		// The self-loop must not poison the settle pass.
		for id in [NodeId::Int(1), NodeId::Int(2)] {
			let (x, y) = state.position_of(&id).unwrap();
			assert!(x.is_finite() && y.is_finite());
		}
	}

	#[test]
	fn identical_input_builds_identical_vertex_and_edge_sets() {
		let a = GraphState::new(&sample(), 800.0, 600.0).unwrap();
		let b = GraphState::new(&sample(), 800.0, 600.0).unwrap();

		assert_eq!(a.node_count(), b.node_count());
		assert_eq!(a.edge_endpoints(), b.edge_endpoints());
		for id in [NodeId::Int(1), NodeId::Int(2), NodeId::Int(3), NodeId::Int(4)] {
			assert!(a.contains(&id) && b.contains(&id));
			assert_eq!(a.label_of(&id), b.label_of(&id));
		}
	}

	#[test]
	fn settled_coordinates_are_finite() {
		let state = GraphState::new(&sample(), 800.0, 600.0).unwrap();
		for id in [NodeId::Int(1), NodeId::Int(2), NodeId::Int(3), NodeId::Int(4)] {
			let (x, y) = state.position_of(&id).unwrap();
			assert!(x.is_finite() && y.is_finite());
		}
	}

	#[test]
	fn fit_to_view_frames_the_layout_inside_the_canvas() {
		let (width, height) = (800.0, 600.0);
		let state = GraphState::new(&sample(), width, height).unwrap();
		let t = &state.transform;
		assert!((ZOOM_RANGE.0..=ZOOM_RANGE.1).contains(&t.k));

		for id in [NodeId::Int(1), NodeId::Int(2), NodeId::Int(3), NodeId::Int(4)] {
			let (x, y) = state.position_of(&id).unwrap();
			let (sx, sy) = (x as f64 * t.k + t.x, y as f64 * t.k + t.y);
			assert!((0.0..=width).contains(&sx), "x out of frame: {sx}");
			assert!((0.0..=height).contains(&sy), "y out of frame: {sy}");
		}
	}

	#[test]
	fn empty_document_builds_an_empty_graph() {
		let state = GraphState::new(&GraphData::default(), 800.0, 600.0).unwrap();
		assert_eq!(state.node_count(), 0);
		assert_eq!(state.edge_count(), 0);
	}
}
