//! Zoom-dependent scaling configuration for graph visuals.
//!
//! Centralizes how visual parameters behave at different zoom levels.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: The coordinate system of the layout. Values in
//!   world-space scale proportionally with zoom.
//! - **Screen-space**: Pixel coordinates on the canvas. Values in
//!   screen-space remain constant regardless of zoom level.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
#[allow(
	dead_code,
	reason = "World variant completes the API for users customizing ScaleConfig"
)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	/// Use `f64::NEG_INFINITY` or `f64::INFINITY` for unbounded.
	Clamped {
		/// Lower bound in screen pixels.
		min_screen: f64,
		/// Upper bound in screen pixels.
		max_screen: f64,
	},
}

impl ScaleBehavior {
	/// Compute the world-space value for a given base value and zoom level.
	///
	/// The returned value should be used directly in world-space drawing
	/// commands (after the canvas transform has been applied).
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => {
				// screen_size = world_size * k, so the world-space bounds
				// are the screen bounds divided by k.
				let min_world = min_screen / k;
				let max_world = max_screen / k;
				base.clamp(min_world, max_world)
			}
		}
	}
}

/// Configuration for node visual scaling.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in world units.
	pub radius: f64,
	/// How the node radius scales with zoom.
	pub radius_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Minimum zoom level for label font scaling.
	pub label_min_k: f64,
	/// Gap between the circle's top and the label baseline, screen pixels.
	pub label_offset: f64,
}

/// Configuration for edge visual scaling.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Base line width in screen pixels.
	pub line_width: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node sizing.
	pub node: NodeScaleConfig,
	/// Edge sizing.
	pub edge: EdgeScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 8.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 4.0,
					max_screen: f64::INFINITY,
				},
				label_size: 10.0,
				label_min_k: 0.5,
				label_offset: 4.0,
			},
			edge: EdgeScaleConfig { line_width: 1.0 },
		}
	}
}

/// Pre-computed scale values for a specific zoom level.
///
/// Create this once per frame and pass it to rendering functions.
/// All sizes are in world-space (ready to use after canvas transform).
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Current zoom level.
	pub k: f64,
	/// Node radius in world-space.
	pub node_radius: f64,
	/// Label font size string (e.g., "10px sans-serif").
	pub label_font: String,
	/// Label offset above the circle in world-space.
	pub label_offset: f64,
	/// Edge line width in world-space.
	pub edge_line_width: f64,
}

impl ScaledValues {
	/// Compute scaled values from configuration and current zoom level.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let node_radius = config.node.radius_behavior.apply(config.node.radius, k);
		let label_font_size = config.node.label_size / k.max(config.node.label_min_k);

		Self {
			k,
			node_radius,
			label_font: format!("{}px sans-serif", label_font_size),
			label_offset: config.node.label_offset / k,
			edge_line_width: config.edge.line_width / k,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn world_behavior_ignores_zoom() {
		assert_eq!(ScaleBehavior::World.apply(8.0, 0.25), 8.0);
		assert_eq!(ScaleBehavior::World.apply(8.0, 4.0), 8.0);
	}

	#[test]
	fn screen_behavior_counteracts_zoom() {
		assert_eq!(ScaleBehavior::Screen.apply(10.0, 2.0), 5.0);
		assert_eq!(ScaleBehavior::Screen.apply(10.0, 0.5), 20.0);
	}

	#[test]
	fn clamped_behavior_enforces_minimum_screen_size() {
		let behavior = ScaleBehavior::Clamped {
			min_screen: 4.0,
			max_screen: f64::INFINITY,
		};
		// At k=1 the base passes through; far out the minimum kicks in.
		assert_eq!(behavior.apply(8.0, 1.0), 8.0);
		assert_eq!(behavior.apply(8.0, 0.25), 16.0); // 16 * 0.25 = 4px on screen
	}

	#[test]
	fn scaled_values_keep_edges_screen_constant() {
		let config = ScaleConfig::default();
		let near = ScaledValues::new(&config, 4.0);
		let far = ScaledValues::new(&config, 0.5);
		assert_eq!(near.edge_line_width * 4.0, config.edge.line_width);
		assert_eq!(far.edge_line_width * 0.5, config.edge.line_width);
	}

	#[test]
	fn label_font_shrinks_below_min_zoom() {
		let config = ScaleConfig::default();
		// Above label_min_k the on-screen size is constant.
		assert_eq!(ScaledValues::new(&config, 2.0).label_font, "5px sans-serif");
		// Below it, the font stops growing in world-space and shrinks on screen.
		assert_eq!(
			ScaledValues::new(&config, 0.25).label_font,
			"20px sans-serif"
		);
	}
}
