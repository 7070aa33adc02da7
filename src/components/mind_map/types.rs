/// A concept as owned by the host's concept store.
#[derive(Clone, Debug, PartialEq)]
pub struct Concept {
	pub id: String,
	pub label: String,
	pub description: String,
	/// Outgoing links, in the order they were recorded.
	pub connections: Vec<String>,
}

impl Concept {
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			description: String::new(),
			connections: Vec::new(),
		}
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn connected_to(mut self, target: impl Into<String>) -> Self {
		self.connections.push(target.into());
		self
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	pub id: String,
	pub label: String,
	pub description: String,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: &'static str,
}

impl PositionedNode {
	pub fn contains(&self, x: f64, y: f64) -> bool {
		let (dx, dy) = (self.x - x, self.y - y);
		(dx * dx + dy * dy).sqrt() <= self.radius
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	pub source: String,
	pub target: String,
}
