use leptos::prelude::*;
use log::warn;
use web_sys::{KeyboardEvent, MouseEvent};

use super::render;
use super::state::MindMapState;
use super::surface::{self, Surface};
use super::types::Concept;

/// Concept graph with click-to-select and select-then-connect editing.
///
/// Completed connections are reported through `on_connect_concepts` as
/// `(source_id, target_id)`; the view only keeps a display copy of the new
/// edge until the host hands back an updated concept list.
#[component]
pub fn MindMapView(
	#[prop(into)] concepts: Signal<Vec<Concept>>,
	#[prop(into)] on_connect_concepts: Callback<(String, String)>,
	#[prop(into, default = "Add concepts to visualize relationships between key ideas".to_string())]
	placeholder: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let state = RwSignal::new(MindMapState::new(&concepts.get_untracked()));
	let (resize_epoch, set_resize_epoch) = signal(0u32);

	Effect::new(move |_| {
		let concepts = concepts.get();
		state.update(|s| s.set_concepts(&concepts));
	});

	surface::track_resizes(set_resize_epoch);

	// Paint pass: runs on any state change or window resize.
	Effect::new(move |_| {
		resize_epoch.track();
		let (Some(canvas), Some(container)) = (canvas_ref.get(), container_ref.get()) else {
			return;
		};
		let Some(commands) = state.with(render::frame) else {
			return;
		};
		match Surface::acquire(&canvas, &container) {
			Ok(surface) => surface.paint(&commands),
			Err(err) => warn!("mind map surface unavailable: {err}"),
		}
	});

	let local_point = move |ev: &MouseEvent| {
		let canvas = canvas_ref.get()?;
		let rect = canvas.get_bounding_client_rect();
		Some(surface::to_local(
			(ev.client_x() as f64, ev.client_y() as f64),
			(rect.left(), rect.top()),
		))
	};

	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(request) = state.try_update(|s| s.click(x, y)).flatten() {
			on_connect_concepts.run((request.source, request.target));
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		if let Some((x, y)) = local_point(&ev) {
			state.maybe_update(|s| s.pointer_move(x, y));
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		state.maybe_update(|s| s.pointer_leave());
	};

	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() == "Escape" {
			state.maybe_update(|s| s.cancel_connecting());
		}
	};

	let selected = move || {
		state.with(|s| {
			s.selected_node()
				.map(|node| (node.label.clone(), node.description.clone()))
		})
	};
	let connecting = move || state.with(|s| s.interaction.is_connecting());
	let is_empty = move || state.with(|s| s.nodes().is_empty());
	// A hidden canvas keeps stale pixels out of the empty state.
	let canvas_style = move || {
		let (display, cursor) = state.with(|s| {
			(
				if s.nodes().is_empty() { "none" } else { "block" },
				if s.interaction.pointed.is_some() { "pointer" } else { "default" },
			)
		});
		format!(
			"display: {display}; width: 100%; height: 100%; min-height: 300px; cursor: {cursor};"
		)
	};

	view! {
		<div class="mind-map" style="display: flex; flex-direction: column; height: 100%;">
			<div class="mind-map-toolbar">
				<div class="mind-map-selection">
					{move || {
						selected()
							.map(|(label, description)| {
								view! {
									<span class="mind-map-label">{label}": "</span>
									<span class="mind-map-description">{description}</span>
								}
							})
					}}
				</div>
				<div class="mind-map-actions">
					<Show when=move || selected().is_some() || connecting()>
						<button
							class="mind-map-connect"
							disabled=connecting
							on:click=move |_| {
								state.maybe_update(|s| s.request_connect());
							}
						>
							{move || {
								if connecting() {
									"Click on target node"
								} else {
									"Connect to another concept"
								}
							}}
						</button>
					</Show>
					<Show when=connecting>
						<button
							class="mind-map-cancel"
							on:click=move |_| {
								state.maybe_update(|s| s.cancel_connecting());
							}
						>
							"Cancel"
						</button>
					</Show>
				</div>
			</div>

			<div
				node_ref=container_ref
				class="mind-map-surface"
				style="position: relative; flex: 1; min-height: 300px; overflow: hidden;"
			>
				<canvas
					node_ref=canvas_ref
					class="mind-map-canvas"
					tabindex="0"
					on:click=on_click
					on:mousemove=on_mousemove
					on:mouseleave=on_mouseleave
					on:keydown=on_keydown
					style=canvas_style
				/>
				<Show when=is_empty>
					<div
						class="mind-map-placeholder"
						style="position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;"
					>
						{placeholder.clone()}
					</div>
				</Show>
			</div>
		</div>
	}
}
