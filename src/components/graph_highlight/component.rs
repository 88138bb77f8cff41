use leptos::prelude::*;
use log::warn;

use super::dom::install_click_highlighter;
use super::state::ClickHighlighter;
use super::types::{GraphClasses, Palette};

/// Inline SVG graph whose nodes highlight their edges when clicked.
#[component]
pub fn HighlightedGraph(
	/// Rendered SVG markup, e.g. the output of `dot -Tsvg`.
	#[prop(into)]
	svg: Signal<String>,
	/// Edge styles; defaults to [`Palette::default`]. The click listener is
	/// document-wide and installed once, so only the first mounted graph's
	/// palette takes effect.
	#[prop(optional)]
	palette: Option<Palette>,
	/// Class names of edge and node groups; defaults to Graphviz's. Like
	/// `palette`, only the first mounted graph's value takes effect.
	#[prop(optional)]
	classes: Option<GraphClasses>,
) -> impl IntoView {
	let highlighter = ClickHighlighter::new(palette.unwrap_or_default());
	let classes = classes.unwrap_or_default();

	Effect::new(move |_| {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			warn!("No document; click highlighting disabled");
			return;
		};
		match install_click_highlighter(&document, highlighter.clone(), classes.clone()) {
			Ok(true) => {}
			Ok(false) => warn!(
				"Click highlighter already installed; this graph's palette and classes are ignored"
			),
			Err(err) => warn!("Failed to install click highlighter: {:?}", err),
		}
	});

	view! { <div class="highlighted-graph" inner_html=move || svg.get() /> }
}
