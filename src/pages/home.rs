use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::info;
use uuid::Uuid;

use crate::components::mind_map::{Concept, MindMapView};

/// Starter concepts for the reading companion's sample book.
fn sample_concepts() -> Vec<Concept> {
	vec![
		Concept::new("class", "Class")
			.with_description("A group defined by its relation to the means of production")
			.connected_to("bourgeoisie")
			.connected_to("proletariat"),
		Concept::new("capital", "Capital")
			.with_description("Accumulated labour put to work to produce surplus value"),
		Concept::new("bourgeoisie", "Bourgeoisie")
			.with_description("The class owning the means of production")
			.connected_to("capital"),
		Concept::new("proletariat", "Proletariat")
			.with_description("The class selling its labour power to live"),
	]
}

/// Appends a new unconnected concept and returns its id. Blank labels are
/// rejected.
fn add_concept(store: &mut Vec<Concept>, label: &str, description: &str) -> Option<String> {
	let label = label.trim();
	if label.is_empty() {
		return None;
	}
	let id = Uuid::new_v4().to_string();
	store.push(Concept::new(id.clone(), label).with_description(description.trim()));
	Some(id)
}

/// Records `source -> target`. Returns false when the source is unknown or
/// the link already exists.
fn connect_concepts(store: &mut [Concept], source: &str, target: &str) -> bool {
	let Some(concept) = store.iter_mut().find(|c| c.id == source) else {
		return false;
	};
	if concept.connections.iter().any(|id| id == target) {
		return false;
	}
	concept.connections.push(target.to_string());
	true
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let concepts = RwSignal::new(sample_concepts());
	let (label, set_label) = signal(String::new());
	let (description, set_description) = signal(String::new());

	let on_connect = Callback::new(move |(source, target): (String, String)| {
		concepts.update(|store| {
			if connect_concepts(store, &source, &target) {
				info!("stored connection {source} -> {target}");
			}
		});
	});

	let on_add = move |ev: SubmitEvent| {
		ev.prevent_default();
		let added = concepts
			.try_update(|store| {
				add_concept(store, &label.get_untracked(), &description.get_untracked())
			})
			.flatten();
		if let Some(id) = added {
			info!("added concept {id}");
			set_label.set(String::new());
			set_description.set(String::new());
		}
	};

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

			<div class="mind-map-page">
				<div class="mind-map-header">
					<h1>"Mind Map"</h1>
					<p class="subtitle">
						"Click a concept to select it, then connect it to another. Esc cancels."
					</p>
					<form class="concept-form" on:submit=on_add>
						<input
							type="text"
							placeholder="Concept"
							prop:value=label
							on:input=move |ev| set_label.set(event_target_value(&ev))
						/>
						<input
							type="text"
							placeholder="Description"
							prop:value=description
							on:input=move |ev| set_description.set(event_target_value(&ev))
						/>
						<button type="submit">"Add concept"</button>
					</form>
				</div>
				<MindMapView concepts=concepts on_connect_concepts=on_connect />
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add_concept_assigns_fresh_ids() {
		let mut store = Vec::new();
		let a = add_concept(&mut store, " Surplus value ", "  ").unwrap();
		let b = add_concept(&mut store, "Labour", "Work").unwrap();
		assert_ne!(a, b);
		assert_eq!(store[0].label, "Surplus value");
		assert_eq!(store[0].description, "");
		assert!(store[0].connections.is_empty());
		assert_eq!(store[1].id, b);
	}

	#[test]
	fn blank_labels_are_rejected() {
		let mut store = Vec::new();
		assert_eq!(add_concept(&mut store, "   ", "nothing"), None);
		assert!(store.is_empty());
	}

	#[test]
	fn connect_appends_once() {
		let mut store = sample_concepts();
		assert!(connect_concepts(&mut store, "capital", "class"));
		assert!(!connect_concepts(&mut store, "capital", "class"));
		assert!(!connect_concepts(&mut store, "nobody", "class"));
		let capital = store.iter().find(|c| c.id == "capital").unwrap();
		assert_eq!(capital.connections, vec!["class".to_string()]);
	}

	#[test]
	fn sample_links_point_at_known_concepts() {
		let store = sample_concepts();
		for concept in &store {
			for target in &concept.connections {
				assert!(store.iter().any(|c| &c.id == target));
			}
		}
	}
}
