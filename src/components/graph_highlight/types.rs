use thiserror::Error;

pub const DIMMED_WIDTH: f64 = 1.0;
pub const DIMMED_OPACITY: f64 = 0.5;
pub const DIMMED_COLOR: &str = "#444444";
pub const ACCENT_WIDTH: f64 = 5.0;
pub const ACCENT_OPACITY: f64 = 1.0;
pub const OUTGOING_COLOR: &str = "#aa3333";
pub const INCOMING_COLOR: &str = "#333377";

/// Separator Graphviz writes between the endpoints of a directed edge title.
pub const EDGE_SEPARATOR: &str = "->";

/// Emphasis applied to an element related to the selected label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
	/// Edge leaving the selected node.
	Outgoing,
	/// Edge arriving at the selected node.
	Incoming,
	/// Node at either end of a highlighted edge.
	Related,
}

/// `font-weight` values written to node labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
	/// Reset state.
	Normal,
	/// Label of a related node.
	Bold,
}

impl FontWeight {
	/// Attribute value as written to the DOM.
	pub fn as_str(self) -> &'static str {
		match self {
			FontWeight::Normal => "normal",
			FontWeight::Bold => "bold",
		}
	}
}

/// Stroke attributes written to an edge's path and arrowheads.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStroke {
	/// `stroke-width`
	pub width: f64,
	/// `stroke-opacity`
	pub opacity: f64,
	/// `stroke`
	pub color: String,
}

impl EdgeStroke {
	/// Build a stroke from its three attribute values.
	pub fn new(width: f64, opacity: f64, color: impl Into<String>) -> Self {
		Self {
			width,
			opacity,
			color: color.into(),
		}
	}

	/// `(attribute, value)` pairs in the order they are applied.
	pub fn attributes(&self) -> [(&'static str, String); 3] {
		[
			("stroke-width", self.width.to_string()),
			("stroke-opacity", self.opacity.to_string()),
			("stroke", self.color.clone()),
		]
	}
}

/// Edge styles for the reset pass and both highlight directions.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	/// Every edge after the reset pass.
	pub dimmed: EdgeStroke,
	/// Edges whose source is the selected label.
	pub outgoing: EdgeStroke,
	/// Edges whose target is the selected label.
	pub incoming: EdgeStroke,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			dimmed: EdgeStroke::new(DIMMED_WIDTH, DIMMED_OPACITY, DIMMED_COLOR),
			outgoing: EdgeStroke::new(ACCENT_WIDTH, ACCENT_OPACITY, OUTGOING_COLOR),
			incoming: EdgeStroke::new(ACCENT_WIDTH, ACCENT_OPACITY, INCOMING_COLOR),
		}
	}
}

impl Palette {
	/// Stroke for an edge highlight, `None` for kinds that don't style edges.
	pub fn stroke_for(&self, kind: Highlight) -> Option<&EdgeStroke> {
		match kind {
			Highlight::Outgoing => Some(&self.outgoing),
			Highlight::Incoming => Some(&self.incoming),
			Highlight::Related => None,
		}
	}
}

/// Class names identifying graph groups in the SVG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphClasses {
	/// Class on edge groups.
	pub edge: String,
	/// Class on node groups.
	pub node: String,
}

impl Default for GraphClasses {
	fn default() -> Self {
		Self {
			edge: "edge".into(),
			node: "node".into(),
		}
	}
}

/// Source and target labels decoded from an edge title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeEndpoints<'a> {
	/// Label before the separator.
	pub source: &'a str,
	/// Label after the separator.
	pub target: &'a str,
}

impl EdgeEndpoints<'_> {
	/// Whether `label` names either end of the edge.
	pub fn touches(&self, label: &str) -> bool {
		self.source == label || self.target == label
	}
}

/// Split an edge title such as `"glibc->bash"` into trimmed endpoints.
///
/// Only the first two segments count: `"a->b->c"` is the edge `a -> b`.
pub fn parse_edge_title(title: &str) -> Option<EdgeEndpoints<'_>> {
	let mut parts = title.split(EDGE_SEPARATOR);
	let source = parts.next()?;
	let target = parts.next()?;
	Some(EdgeEndpoints {
		source: source.trim(),
		target: target.trim(),
	})
}

/// Reasons a graph element cannot be read or styled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HighlightError {
	/// The element has no child matching `selector`.
	#[error("element '{id}' has no '{selector}' child")]
	MissingChild {
		/// Element identifier.
		id: String,
		/// CSS selector that matched nothing.
		selector: &'static str,
	},

	/// The element has no title text.
	#[error("element '{id}' has no title")]
	MissingTitle {
		/// Element identifier.
		id: String,
	},

	/// The edge title lacks the endpoint separator.
	#[error("edge '{id}' has malformed title '{title}'")]
	MalformedTitle {
		/// Element identifier.
		id: String,
		/// Title text as found.
		title: String,
	},

	/// A DOM call threw.
	#[error("DOM error: {0}")]
	Dom(String),
}

/// Counts from one reset or highlight pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightReport {
	/// Edges styled as outgoing.
	pub outgoing: usize,
	/// Edges styled as incoming.
	pub incoming: usize,
	/// Node labels set to bold.
	pub bolded: usize,
	/// Elements skipped because they were malformed.
	pub skipped: usize,
}

impl HighlightReport {
	/// Add the counts of another pass.
	pub fn merge(&mut self, other: HighlightReport) {
		self.outgoing += other.outgoing;
		self.incoming += other.incoming;
		self.bolded += other.bolded;
		self.skipped += other.skipped;
	}
}
