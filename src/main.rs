use svg_graph_highlight::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App)
}
