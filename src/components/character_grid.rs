use crate::pages::practice_path;
use leptos::prelude::*;
use leptos_router::components::A;

/// Lays out characters as links to their practice page. `None` cells are left blank so rows stay
/// aligned.
#[component]
pub fn CharacterGrid(
	cells: Vec<Option<char>>,
	#[prop(optional)] columns: Option<usize>,
) -> impl IntoView {
	let style = columns.map(|columns| format!("grid-template-columns: repeat({columns}, 1fr)"));
	let cells = cells
		.into_iter()
		.map(|cell| match cell {
			Some(c) => view! {
				<A href=practice_path(c) attr:class="CharacterCell">
					{c.to_string()}
				</A>
			}
			.into_any(),
			None => view! { <span class="CharacterCell Empty"></span> }.into_any(),
		})
		.collect_view();

	view! {
		<div class="CharacterGrid" style=style>
			{cells}
		</div>
	}
}
