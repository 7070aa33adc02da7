use log::{debug, info};

use super::layout::layout;
use super::types::{Concept, Edge, PositionedNode};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectMode {
	#[default]
	Idle,
	Connecting {
		source: String,
	},
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
	pub selected: Option<String>,
	pub mode: ConnectMode,
	/// Node under the pointer, if any.
	pub pointed: Option<String>,
}

impl InteractionState {
	pub fn is_connecting(&self) -> bool {
		matches!(self.mode, ConnectMode::Connecting { .. })
	}

	pub fn connecting_source(&self) -> Option<&str> {
		match &self.mode {
			ConnectMode::Connecting { source } => Some(source),
			ConnectMode::Idle => None,
		}
	}
}

/// A connection the user completed; the host is expected to persist it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectRequest {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct MindMapState {
	nodes: Vec<PositionedNode>,
	edges: Vec<Edge>,
	pub interaction: InteractionState,
}

impl MindMapState {
	pub fn new(concepts: &[Concept]) -> Self {
		let mut state = Self::default();
		state.set_concepts(concepts);
		state
	}

	/// Replaces nodes and edges wholesale. A selection whose concept
	/// disappeared is kept but stops matching any node. A pending connection
	/// whose source disappeared is dropped, and the pointed node is cleared
	/// until the next pointer move since every node may have moved.
	pub fn set_concepts(&mut self, concepts: &[Concept]) {
		let (nodes, edges) = layout(concepts);
		debug!("mind map layout: {} nodes, {} edges", nodes.len(), edges.len());
		self.nodes = nodes;
		self.edges = edges;
		self.interaction.pointed = None;

		if let Some(source) = self.interaction.connecting_source()
			&& self.node(source).is_none()
		{
			debug!("connect source {source} removed, back to idle");
			self.interaction.mode = ConnectMode::Idle;
		}
	}

	pub fn nodes(&self) -> &[PositionedNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn node(&self, id: &str) -> Option<&PositionedNode> {
		self.nodes.iter().find(|node| node.id == id)
	}

	/// First node in layout order whose circle contains the point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<&PositionedNode> {
		self.nodes.iter().find(|node| node.contains(x, y))
	}

	pub fn selected_node(&self) -> Option<&PositionedNode> {
		self.interaction
			.selected
			.as_deref()
			.and_then(|id| self.node(id))
	}

	/// The node a pending connection would currently land on.
	pub fn tentative_target(&self) -> Option<&PositionedNode> {
		if !self.interaction.is_connecting() {
			return None;
		}
		self.interaction
			.pointed
			.as_deref()
			.and_then(|id| self.node(id))
			.or_else(|| self.selected_node())
	}

	/// Handles a click in surface-local coordinates. Returns the connection
	/// to hand to the host when this click completes one.
	pub fn click(&mut self, x: f64, y: f64) -> Option<ConnectRequest> {
		let Some(hit) = self.node_at_position(x, y).map(|node| node.id.clone()) else {
			self.interaction.selected = None;
			return None;
		};

		let source = match &self.interaction.mode {
			ConnectMode::Idle => {
				self.interaction.selected = Some(hit);
				return None;
			}
			ConnectMode::Connecting { source } if *source == hit => return None,
			ConnectMode::Connecting { source } => source.clone(),
		};

		info!("connecting concepts {source} -> {hit}");
		self.edges.push(Edge {
			source: source.clone(),
			target: hit.clone(),
		});
		self.interaction.mode = ConnectMode::Idle;
		self.interaction.selected = None;
		Some(ConnectRequest {
			source,
			target: hit,
		})
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
		let pointed = self.node_at_position(x, y).map(|node| node.id.clone());
		if self.interaction.pointed == pointed {
			return false;
		}
		self.interaction.pointed = pointed;
		true
	}

	pub fn pointer_leave(&mut self) -> bool {
		self.interaction.pointed.take().is_some()
	}

	pub fn can_request_connect(&self) -> bool {
		!self.interaction.is_connecting() && self.selected_node().is_some()
	}

	/// Starts connecting from the current selection. Ignored without a live
	/// selection or while a connection is already pending.
	pub fn request_connect(&mut self) -> bool {
		if !self.can_request_connect() {
			return false;
		}
		let Some(source) = self.interaction.selected.clone() else {
			return false;
		};
		debug!("connect mode from {source}");
		self.interaction.mode = ConnectMode::Connecting { source };
		true
	}

	pub fn cancel_connecting(&mut self) -> bool {
		if !self.interaction.is_connecting() {
			return false;
		}
		info!("connect cancelled");
		self.interaction.mode = ConnectMode::Idle;
		true
	}
}
