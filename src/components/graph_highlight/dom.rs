use std::cell::Cell;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Node};

use super::state::ClickHighlighter;
use super::surface::{GraphElement, GraphSurface};
use super::types::{FontWeight, GraphClasses, Highlight, HighlightError, Palette};

const EDGE_STROKED: &str = "path, polygon";
const NODE_LABEL: &str = "text";

thread_local! {
	static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ElementKind {
	Edge,
	Node,
}

/// A Graphviz-style `<g class="edge|node">` group in a live document.
#[derive(Clone, Debug)]
pub struct SvgGraphElement {
	element: Element,
	kind: ElementKind,
}

impl SvgGraphElement {
	/// Wrap an edge group.
	pub fn edge(element: Element) -> Self {
		Self {
			element,
			kind: ElementKind::Edge,
		}
	}

	/// Wrap a node group.
	pub fn node(element: Element) -> Self {
		Self {
			element,
			kind: ElementKind::Node,
		}
	}

	fn children(&self, selector: &'static str) -> Result<Vec<Element>, HighlightError> {
		let list = self.element.query_selector_all(selector).map_err(js_error)?;
		let found: Vec<Element> = (0..list.length())
			.filter_map(|i| list.item(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect();
		if found.is_empty() {
			return Err(HighlightError::MissingChild {
				id: self.id(),
				selector,
			});
		}
		Ok(found)
	}

	fn write(&self, selector: &'static str, attrs: &[(&str, String)]) -> Result<(), HighlightError> {
		for child in self.children(selector)? {
			for (name, value) in attrs {
				child.set_attribute(name, value).map_err(js_error)?;
			}
		}
		Ok(())
	}

	fn set_weight(&self, weight: FontWeight) -> Result<(), HighlightError> {
		self.write(NODE_LABEL, &[("font-weight", weight.as_str().to_string())])
	}
}

impl GraphElement for SvgGraphElement {
	fn id(&self) -> String {
		self.element.id()
	}

	fn label(&self) -> Result<String, HighlightError> {
		self.element
			.query_selector("title")
			.map_err(js_error)?
			.and_then(|title| title.text_content())
			.ok_or_else(|| HighlightError::MissingTitle { id: self.id() })
	}

	fn reset(&self, palette: &Palette) -> Result<(), HighlightError> {
		match self.kind {
			ElementKind::Edge => self.write(EDGE_STROKED, &palette.dimmed.attributes()),
			ElementKind::Node => self.set_weight(FontWeight::Normal),
		}
	}

	fn set_highlight(&self, kind: Highlight, palette: &Palette) -> Result<(), HighlightError> {
		match self.kind {
			ElementKind::Edge => match palette.stroke_for(kind) {
				Some(stroke) => self.write(EDGE_STROKED, &stroke.attributes()),
				None => Ok(()),
			},
			ElementKind::Node => self.set_weight(FontWeight::Bold),
		}
	}
}

/// Graph surface over every matching group in a document.
#[derive(Clone, Debug)]
pub struct DomGraph {
	document: Document,
	classes: GraphClasses,
}

impl DomGraph {
	/// Scan `document` using Graphviz's `edge`/`node` classes.
	pub fn new(document: Document) -> Self {
		Self::with_classes(document, GraphClasses::default())
	}

	/// Scan `document` using custom class names.
	pub fn with_classes(document: Document, classes: GraphClasses) -> Self {
		Self { document, classes }
	}

	fn by_class(&self, class: &str) -> Vec<Element> {
		let collection = self.document.get_elements_by_class_name(class);
		(0..collection.length())
			.filter_map(|i| collection.item(i))
			.collect()
	}
}

impl GraphSurface for DomGraph {
	type Element = SvgGraphElement;

	fn edges(&self) -> Vec<SvgGraphElement> {
		self.by_class(&self.classes.edge)
			.into_iter()
			.map(SvgGraphElement::edge)
			.collect()
	}

	fn nodes(&self) -> Vec<SvgGraphElement> {
		self.by_class(&self.classes.node)
			.into_iter()
			.map(SvgGraphElement::node)
			.collect()
	}
}

/// Text of the element a click landed on, trimmed; empty for blank space.
pub fn selected_label(event: &Event) -> String {
	event
		.target()
		.and_then(|target| target.dyn_into::<Node>().ok())
		.and_then(|node| node.text_content())
		.map(|text| text.trim().to_string())
		.unwrap_or_default()
}

/// Attach `highlighter` to every click on `document`, scanning groups with
/// the given `classes`.
///
/// The listener bubbles, lives for the rest of the page and is registered at
/// most once; later calls return `Ok(false)` and keep the first highlighter.
pub fn install_click_highlighter(
	document: &Document,
	highlighter: ClickHighlighter,
	classes: GraphClasses,
) -> Result<bool, JsValue> {
	if INSTALLED.with(Cell::get) {
		return Ok(false);
	}

	let graph = DomGraph::with_classes(document.clone(), classes);
	let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		let label = selected_label(&ev);
		debug!("Clicked on: {}", label);
		let report = highlighter.handle_click(&graph, &label);
		if report.skipped > 0 {
			debug!("{} malformed graph elements skipped", report.skipped);
		}
	});
	document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
	on_click.forget();

	INSTALLED.with(|installed| installed.set(true));
	info!("Click highlighter installed");
	Ok(true)
}

fn js_error(err: JsValue) -> HighlightError {
	HighlightError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
