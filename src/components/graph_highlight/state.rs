use std::collections::HashSet;

use log::{debug, warn};

use super::surface::{GraphElement, GraphSurface};
use super::types::{Highlight, HighlightError, HighlightReport, Palette, parse_edge_title};

/// Recomputes graph emphasis from the label of the clicked element.
///
/// Every click runs a full reset before highlighting, so the result depends
/// only on the latest selection. Malformed elements are logged and skipped;
/// they never abort the rest of the pass.
#[derive(Clone, Debug, Default)]
pub struct ClickHighlighter {
	palette: Palette,
}

impl ClickHighlighter {
	/// Highlighter drawing with `palette`.
	pub fn new(palette: Palette) -> Self {
		Self { palette }
	}

	/// Reset pass followed by the highlight pass for `selected`.
	pub fn handle_click<S: GraphSurface>(&self, surface: &S, selected: &str) -> HighlightReport {
		let mut report = self.reset(surface);
		report.merge(self.highlight(surface, selected));
		report
	}

	/// Dim every edge and set every node label to normal weight.
	pub fn reset<S: GraphSurface>(&self, surface: &S) -> HighlightReport {
		let mut report = HighlightReport::default();
		for element in surface.edges().iter().chain(surface.nodes().iter()) {
			if let Err(err) = element.reset(&self.palette) {
				skip(&mut report, &err);
			}
		}
		report
	}

	/// Style edges touching `selected` and bold the labels at both of their ends.
	///
	/// Outgoing styling is applied before incoming, so a self-loop ends up
	/// with the incoming stroke.
	pub fn highlight<S: GraphSurface>(&self, surface: &S, selected: &str) -> HighlightReport {
		let mut report = HighlightReport::default();
		let selected = selected.trim();
		if selected.is_empty() {
			return report;
		}

		let mut related: HashSet<String> = HashSet::new();
		for edge in surface.edges() {
			let title = match edge.label() {
				Ok(title) => title,
				Err(err) => {
					skip(&mut report, &err);
					continue;
				}
			};
			let Some(ends) = parse_edge_title(&title) else {
				skip(
					&mut report,
					&HighlightError::MalformedTitle {
						id: edge.id(),
						title: title.clone(),
					},
				);
				continue;
			};

			if ends.source == selected {
				match edge.set_highlight(Highlight::Outgoing, &self.palette) {
					Ok(()) => report.outgoing += 1,
					Err(err) => skip(&mut report, &err),
				}
			}
			if ends.target == selected {
				match edge.set_highlight(Highlight::Incoming, &self.palette) {
					Ok(()) => report.incoming += 1,
					Err(err) => skip(&mut report, &err),
				}
			}
			if ends.touches(selected) {
				related.insert(ends.source.to_owned());
				related.insert(ends.target.to_owned());
			}
		}

		if related.is_empty() {
			return report;
		}

		for node in surface.nodes() {
			let name = match node.label() {
				Ok(name) => name,
				Err(err) => {
					skip(&mut report, &err);
					continue;
				}
			};
			if !related.contains(name.trim()) {
				continue;
			}
			match node.set_highlight(Highlight::Related, &self.palette) {
				Ok(()) => report.bolded += 1,
				Err(err) => skip(&mut report, &err),
			}
		}

		debug!(
			"Highlighted '{}': {} outgoing, {} incoming, {} related",
			selected, report.outgoing, report.incoming, report.bolded
		);
		report
	}
}

fn skip(report: &mut HighlightReport, err: &HighlightError) {
	warn!("Skipping graph element: {}", err);
	report.skipped += 1;
}
