//! Canvas rendering for the settled graph.
//!
//! Drawing happens in three passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Edges as thin translucent lines (world space)
//! 3. Nodes as uniform circles with labels above them (world space)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{GraphState, NodeInfo};
use super::theme::Theme;

/// Renders the complete graph to the canvas.
pub fn render(
	state: &GraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();
}

fn draw_background(state: &GraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				(state.width.max(state.height)) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_edges(
	state: &GraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_stroke_style_str(&theme.edge.color.to_css());
	ctx.set_line_width(scale.edge_line_width);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		// Coincident nodes have nothing to stroke.
		if (dx * dx + dy * dy).sqrt() < 0.001 {
			return;
		}

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	});
}

fn draw_nodes(
	state: &GraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_text_align("center");

	state.graph.visit_nodes(|node| {
		draw_node(ctx, node, scale, theme);
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &force_graph::Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let radius = scale.node_radius;

	if theme.node.use_gradient {
		let gradient = ctx
			.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
			.unwrap();

		let base = theme.node.fill;
		gradient
			.add_color_stop(0.0, &base.lighten(0.4).to_css())
			.unwrap();
		gradient.add_color_stop(0.7, &base.to_css()).unwrap();
		gradient
			.add_color_stop(1.0, &base.darken(0.2).to_css())
			.unwrap();

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	} else {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&theme.node.fill.to_css());
		ctx.fill();
	}

	let label = &node.data.user_data.label;
	if !label.is_empty() {
		ctx.set_fill_style_str(&theme.node.label_color.to_css());
		ctx.set_font(&scale.label_font);
		let _ = ctx.fill_text(label, x, y - radius - scale.label_offset);
	}
}
