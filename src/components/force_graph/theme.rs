//! Visual theming for the graph renderer.
//!
//! Nodes are drawn in a single uniform fill; edges are thin translucent
//! lines. The default theme reproduces a plotting-library look: white
//! background, light blue circles, small dark labels.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in [0, 1].
	pub a: f64,
}

impl Color {
	/// Opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color from RGB channels and an alpha in [0, 1].
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// CSS serialization: `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Edge color; translucency comes from the alpha channel.
	pub color: Color,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Uniform fill for every node.
	pub fill: Color,
	/// Whether nodes have inner gradients (subtle sphere shading).
	pub use_gradient: bool,
	/// Label text color.
	pub label_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Theme name, for diagnostics.
	pub name: &'static str,
	/// Background style.
	pub background: BackgroundStyle,
	/// Edge style.
	pub edge: EdgeStyle,
	/// Node style.
	pub node: NodeStyle,
}

impl Theme {
	/// White background, light blue nodes, thin translucent gray edges.
	/// Matches the classic plotting-library rendering of a graph.
	pub fn paper() -> Self {
		Self {
			name: "paper",
			background: BackgroundStyle {
				color: Color::rgb(255, 255, 255),
				color_secondary: Color::rgb(255, 255, 255),
				use_gradient: false,
			},
			edge: EdgeStyle {
				color: Color::rgba(70, 80, 90, 0.35),
			},
			node: NodeStyle {
				fill: Color::rgb(173, 216, 230), // light blue
				use_gradient: false,
				label_color: Color::rgb(40, 44, 52),
			},
		}
	}

	/// Elegant dark theme with a subtle background gradient. Alternative
	/// preset for callers embedding [`GraphCanvas`](super::GraphCanvas) on
	/// dark pages; the app itself renders with [`Theme::paper`].
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(18, 20, 28),
				color_secondary: Color::rgb(25, 28, 38),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(100, 120, 150, 0.45),
			},
			node: NodeStyle {
				fill: Color::rgb(108, 142, 173),
				use_gradient: true,
				label_color: Color::rgb(220, 225, 232),
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::paper()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_serialize_as_hex() {
		assert_eq!(Color::rgb(173, 216, 230).to_css(), "#add8e6");
	}

	#[test]
	fn translucent_colors_serialize_as_rgba() {
		assert_eq!(
			Color::rgba(70, 80, 90, 0.35).to_css(),
			"rgba(70, 80, 90, 0.35)"
		);
	}

	#[test]
	fn lighten_and_darken_move_toward_extremes() {
		let c = Color::rgb(100, 100, 100);
		assert_eq!(c.lighten(1.0), Color::rgb(255, 255, 255));
		assert_eq!(c.darken(1.0), Color::rgb(0, 0, 0));
		assert!(c.lighten(0.5).r > c.r);
		assert!(c.darken(0.5).r < c.r);
	}

	#[test]
	fn default_theme_is_paper() {
		assert_eq!(Theme::default().name, "paper");
	}
}
