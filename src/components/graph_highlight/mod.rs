mod component;
mod dom;
mod state;
mod surface;
mod types;

pub use component::HighlightedGraph;
pub use dom::{DomGraph, SvgGraphElement, install_click_highlighter, selected_label};
pub use state::ClickHighlighter;
pub use surface::{GraphElement, GraphSurface};
pub use types::{
	EdgeEndpoints, EdgeStroke, FontWeight, GraphClasses, Highlight, HighlightError, HighlightReport,
	Palette, parse_edge_title,
};
