//! Force-directed graph visualization component.
//!
//! Builds an undirected graph from a parsed node/link document, settles a
//! force-directed layout once, and renders it on an HTML canvas:
//! - Uniform circles for nodes, with their labels drawn just above them
//! - Thin translucent lines for edges
//! - Pan and zoom on the settled picture
//!
//! # Example
//!
//! ```ignore
//! use graphdata_viz::{GraphCanvas, GraphData};
//!
//! let data: GraphData = serde_json::from_str(
//!     r#"{"nodes":[{"id":1,"data":{"response":"A"}},
//!                  {"id":2,"data":{"response":"B"}}],
//!         "links":[{"source":1,"target":2}]}"#,
//! )?;
//!
//! view! { <GraphCanvas data=data.into() fullscreen=true /> }
//! ```

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::GraphCanvas;
pub use state::{GraphDataError, GraphState};
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode, NodeId, NodePayload};
