use super::state::MindMapState;

const EDGE_WIDTH: f64 = 2.0;
const EDGE_COLOR: &str = "rgba(139, 92, 246, 0.5)";
const BORDER_WIDTH: f64 = 2.0;
const BORDER_COLOR: &str = "rgba(255, 255, 255, 0.7)";
const SELECTED_BORDER_WIDTH: f64 = 3.0;
const SELECTED_BORDER_COLOR: &str = "#ffffff";
const LABEL_FONT: &str = "bold 14px sans-serif";
const LABEL_COLOR: &str = "#ffffff";
const PREVIEW_WIDTH: f64 = 2.0;
const PREVIEW_COLOR: &str = "rgba(139, 92, 246, 0.8)";
const PREVIEW_DASH: [f64; 2] = [5.0, 3.0];

/// One drawing step on the 2D surface, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
	Clear,
	Line {
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: &'static str,
		dash: Option<[f64; 2]>,
	},
	Circle {
		center: (f64, f64),
		radius: f64,
		fill: &'static str,
		stroke: &'static str,
		stroke_width: f64,
	},
	/// Text centred horizontally and vertically on `at`.
	Text {
		at: (f64, f64),
		text: String,
		font: &'static str,
		color: &'static str,
	},
}

/// Builds the display list for one frame: clear, edges, nodes with labels,
/// then the pending connection preview on top.
pub fn scene(state: &MindMapState) -> Vec<PaintCommand> {
	let mut commands = vec![PaintCommand::Clear];
	draw_edges(state, &mut commands);
	draw_nodes(state, &mut commands);
	draw_preview(state, &mut commands);
	commands
}

/// The display list to paint, or `None` when there is nothing to draw and
/// the surface should be left alone for the empty-state placeholder.
pub fn frame(state: &MindMapState) -> Option<Vec<PaintCommand>> {
	if state.nodes().is_empty() {
		return None;
	}
	Some(scene(state))
}

fn draw_edges(state: &MindMapState, out: &mut Vec<PaintCommand>) {
	for edge in state.edges() {
		// Dangling ends are skipped.
		let (Some(src), Some(tgt)) = (state.node(&edge.source), state.node(&edge.target)) else {
			continue;
		};
		out.push(PaintCommand::Line {
			from: (src.x, src.y),
			to: (tgt.x, tgt.y),
			width: EDGE_WIDTH,
			color: EDGE_COLOR,
			dash: None,
		});
	}
}

fn draw_nodes(state: &MindMapState, out: &mut Vec<PaintCommand>) {
	let selected = state.interaction.selected.as_deref();
	for node in state.nodes() {
		let (stroke, stroke_width) = if selected == Some(node.id.as_str()) {
			(SELECTED_BORDER_COLOR, SELECTED_BORDER_WIDTH)
		} else {
			(BORDER_COLOR, BORDER_WIDTH)
		};
		out.push(PaintCommand::Circle {
			center: (node.x, node.y),
			radius: node.radius,
			fill: node.color,
			stroke,
			stroke_width,
		});
		out.push(PaintCommand::Text {
			at: (node.x, node.y),
			text: node.label.clone(),
			font: LABEL_FONT,
			color: LABEL_COLOR,
		});
	}
}

fn draw_preview(state: &MindMapState, out: &mut Vec<PaintCommand>) {
	let Some(source) = state
		.interaction
		.connecting_source()
		.and_then(|id| state.node(id))
	else {
		return;
	};
	let Some(target) = state.tentative_target() else {
		return;
	};
	out.push(PaintCommand::Line {
		from: (source.x, source.y),
		to: (target.x, target.y),
		width: PREVIEW_WIDTH,
		color: PREVIEW_COLOR,
		dash: Some(PREVIEW_DASH),
	});
}
