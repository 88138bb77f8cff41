pub mod graph_highlight;
