//! graphdata-viz: force-directed rendering of a node/link JSON document.
//!
//! Loads `graphData.json` from a fixed relative path, builds an undirected
//! graph (one labeled vertex per node record, one edge per link record),
//! computes a force-directed layout once, and draws the result on a canvas
//! with pan/zoom.

use std::fmt;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen::JsValue;
use web_sys::XmlHttpRequest;

pub mod components;

pub use components::force_graph::{
	GraphCanvas, GraphData, GraphDataError, GraphLink, GraphNode, NodeId,
};

/// Relative URL of the input document, fixed by convention.
pub const GRAPH_DATA_URL: &str = "graphData.json";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graphdata-viz: logging initialized");
}

/// Error raised while fetching or parsing the input document.
#[derive(Debug)]
pub enum LoadError {
	/// The request could not be issued or completed.
	Request(String),
	/// The server answered with a non-success status.
	Status(u16),
	/// The body was not a well-formed graph document.
	Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LoadError::Request(detail) => write!(f, "request failed: {detail}"),
			LoadError::Status(status) => write!(f, "unexpected HTTP status {status}"),
			LoadError::Parse(e) => write!(f, "malformed graph document: {e}"),
		}
	}
}

impl std::error::Error for LoadError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			LoadError::Parse(e) => Some(e),
			_ => None,
		}
	}
}

/// Load the graph document from [`GRAPH_DATA_URL`].
///
/// Uses a synchronous `XMLHttpRequest`: the read blocks until the body is
/// available, like the file read it stands in for. Expected shape:
/// JSON with `{ nodes: [...], links: [...] }`.
pub fn load_graph_data() -> Result<GraphData, LoadError> {
	let request = |detail: JsValue| LoadError::Request(format!("{detail:?}"));

	let xhr = XmlHttpRequest::new().map_err(request)?;
	xhr.open_with_async("GET", GRAPH_DATA_URL, false)
		.map_err(request)?;
	xhr.send().map_err(request)?;

	let status = xhr.status().map_err(request)?;
	if status != 200 {
		return Err(LoadError::Status(status));
	}
	let body = xhr
		.response_text()
		.map_err(request)?
		.unwrap_or_default();

	let data: GraphData = serde_json::from_str(&body).map_err(LoadError::Parse)?;
	info!(
		"loaded {} nodes, {} links from {}",
		data.nodes.len(),
		data.links.len(),
		GRAPH_DATA_URL
	);
	Ok(data)
}

/// Main application component.
/// Loads the graph document and renders the settled visualization. A missing
/// or malformed document aborts with a panic; the diagnostic reaches the
/// console through the panic hook.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let graph_data = match load_graph_data() {
		Ok(data) => data,
		Err(e) => panic!("failed to load {GRAPH_DATA_URL}: {e}"),
	};
	let graph_signal = Signal::derive(move || graph_data.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Graph Data" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<GraphCanvas data=graph_signal fullscreen=true />
			<div class="graph-overlay">
				<h1>"graphData.json"</h1>
				<p class="subtitle">"Scroll to zoom. Drag to pan."</p>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn load_error_display_carries_context() {
		let parse = serde_json::from_str::<GraphData>("nope").unwrap_err();
		let e = LoadError::Parse(parse);
		assert!(e.to_string().starts_with("malformed graph document"));
		assert_eq!(LoadError::Status(404).to_string(), "unexpected HTTP status 404");
	}
}
