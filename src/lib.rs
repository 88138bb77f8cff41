//! Click-to-highlight for statically rendered SVG dependency graphs, plus the
//! Leptos client-side app that demonstrates it.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};
use wasm_bindgen::prelude::*;

// Only the wasm32 integration tests use it.
#[cfg(test)]
use wasm_bindgen_test as _;

// Modules
mod components;
mod pages;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

pub use crate::components::graph_highlight::{
	ClickHighlighter, DomGraph, EdgeEndpoints, EdgeStroke, FontWeight, GraphClasses, GraphElement,
	GraphSurface, Highlight, HighlightError, HighlightReport, HighlightedGraph, Palette,
	SvgGraphElement, install_click_highlighter, parse_edge_title, selected_label,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Entry point for pages that embed a `dot -Tsvg` graph directly: installs
/// the default highlighter on the current document.
#[wasm_bindgen(js_name = installClickHighlighter)]
pub fn install() -> Result<(), JsValue> {
	init_logging();
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document available"))?;
	install_click_highlighter(&document, ClickHighlighter::default(), GraphClasses::default())?;
	Ok(())
}

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Dependency Graph" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
