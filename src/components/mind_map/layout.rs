use std::f64::consts::PI;

use super::types::{Concept, Edge, PositionedNode};

const PALETTE: &[&str] = &[
	"#8B5CF6", "#EC4899", "#3B82F6", "#10B981", "#F59E0B", "#EF4444",
];

/// Centre of the layout circle in surface coordinates.
pub const CENTER: (f64, f64) = (400.0, 200.0);
pub const LAYOUT_RADIUS: f64 = 150.0;
pub const NODE_RADIUS: f64 = 40.0;

/// Places concepts evenly on a fixed circle and flattens their connections
/// into edges.
///
/// Edges keep concept order, then per-concept connection order. Duplicate,
/// self and dangling edges are passed through untouched.
pub fn layout(concepts: &[Concept]) -> (Vec<PositionedNode>, Vec<Edge>) {
	let n = concepts.len() as f64;
	let (cx, cy) = CENTER;

	let nodes = concepts
		.iter()
		.enumerate()
		.map(|(i, concept)| {
			let angle = (i as f64) * 2.0 * PI / n;
			PositionedNode {
				id: concept.id.clone(),
				label: concept.label.clone(),
				description: concept.description.clone(),
				x: cx + LAYOUT_RADIUS * angle.cos(),
				y: cy + LAYOUT_RADIUS * angle.sin(),
				radius: NODE_RADIUS,
				color: PALETTE[i % PALETTE.len()],
			}
		})
		.collect();

	let edges = concepts
		.iter()
		.flat_map(|concept| {
			concept.connections.iter().map(|target| Edge {
				source: concept.id.clone(),
				target: target.clone(),
			})
		})
		.collect();

	(nodes, edges)
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn concepts(n: usize) -> Vec<Concept> {
		(0..n)
			.map(|i| Concept::new(format!("c{i}"), format!("Concept {i}")))
			.collect()
	}

	#[test]
	fn empty_input_yields_nothing() {
		let (nodes, edges) = layout(&[]);
		assert!(nodes.is_empty());
		assert!(edges.is_empty());
	}

	#[test]
	fn nodes_sit_on_the_circle_at_even_angles() {
		for n in 1..=13 {
			let (nodes, _) = layout(&concepts(n));
			assert_eq!(nodes.len(), n);
			for (i, node) in nodes.iter().enumerate() {
				let (dx, dy) = (node.x - CENTER.0, node.y - CENTER.1);
				assert!(((dx * dx + dy * dy).sqrt() - LAYOUT_RADIUS).abs() < EPS);

				let expected = 2.0 * PI * i as f64 / n as f64;
				let (ex, ey) = (expected.cos(), expected.sin());
				assert!((dx / LAYOUT_RADIUS - ex).abs() < EPS);
				assert!((dy / LAYOUT_RADIUS - ey).abs() < EPS);
				assert_eq!(node.radius, NODE_RADIUS);
			}
		}
	}

	#[test]
	fn single_concept_is_placed_at_angle_zero() {
		let (nodes, _) = layout(&concepts(1));
		assert!((nodes[0].x - 550.0).abs() < EPS);
		assert!((nodes[0].y - 200.0).abs() < EPS);
	}

	#[test]
	fn palette_wraps_around() {
		let (nodes, _) = layout(&concepts(PALETTE.len() + 2));
		for (i, node) in nodes.iter().enumerate() {
			assert_eq!(node.color, PALETTE[i % PALETTE.len()]);
		}
		assert_eq!(nodes[PALETTE.len()].color, nodes[0].color);
		assert_ne!(nodes[0].color, nodes[1].color);
	}

	#[test]
	fn edges_follow_concept_then_connection_order() {
		let input = vec![
			Concept::new("a", "A").connected_to("b").connected_to("c"),
			Concept::new("b", "B"),
			Concept::new("c", "C")
				.connected_to("a")
				.connected_to("a")
				.connected_to("c")
				.connected_to("ghost"),
		];
		let (_, edges) = layout(&input);
		let pairs: Vec<(&str, &str)> = edges
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str()))
			.collect();
		assert_eq!(
			pairs,
			vec![
				("a", "b"),
				("a", "c"),
				("c", "a"),
				("c", "a"),
				("c", "c"),
				("c", "ghost"),
			]
		);
	}

	#[test]
	fn layout_is_repeatable() {
		let input = concepts(7);
		assert_eq!(layout(&input), layout(&input));
	}

	#[test]
	fn class_and_capital_example() {
		let input = vec![
			Concept::new("c1", "Class").connected_to("c2"),
			Concept::new("c2", "Capital"),
		];
		let (nodes, edges) = layout(&input);
		assert!((nodes[0].x - 550.0).abs() < EPS);
		assert!((nodes[1].x - 250.0).abs() < EPS);
		assert!((nodes[1].y - 200.0).abs() < 1e-6);
		assert_eq!(
			edges,
			vec![Edge {
				source: "c1".into(),
				target: "c2".into(),
			}]
		);
	}
}
