use super::types::{Highlight, HighlightError, Palette};

/// A node or edge of a rendered graph that the highlighter can restyle.
pub trait GraphElement {
	/// Identifier used in diagnostics.
	fn id(&self) -> String;

	/// Title text: the vertex label for nodes, `"source->target"` for edges.
	fn label(&self) -> Result<String, HighlightError>;

	/// Return the element to its de-emphasized state.
	fn reset(&self, palette: &Palette) -> Result<(), HighlightError>;

	/// Emphasize the element. Nodes show every kind as a bold label; edges
	/// ignore [`Highlight::Related`].
	fn set_highlight(&self, kind: Highlight, palette: &Palette) -> Result<(), HighlightError>;
}

/// Something that can enumerate the edges and nodes of a rendered graph.
pub trait GraphSurface {
	/// Element handle yielded by the scans.
	type Element: GraphElement;

	/// All edges, in document order.
	fn edges(&self) -> Vec<Self::Element>;

	/// All nodes, in document order.
	fn nodes(&self) -> Vec<Self::Element>;
}
