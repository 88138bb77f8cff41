use leptos::prelude::*;

use crate::components::graph_highlight::HighlightedGraph;

/// Package dependency graph as laid out by `dot -Tsvg`.
const SAMPLE_GRAPH: &str = include_str!("sample_graph.svg");

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_svg = Signal::derive(move || SAMPLE_GRAPH.to_string());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<div class="graph-overlay">
					<h1>"Package Dependencies"</h1>
					<p class="subtitle">
						"Click a package name to highlight what it requires (red) and what requires it (blue)."
					</p>
				</div>
				<HighlightedGraph svg=graph_svg />
			</div>
		</ErrorBoundary>
	}
}
