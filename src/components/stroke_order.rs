use crate::guide::guide_path;
use leptos::prelude::*;

/// The stroke-order diagram for `character`, meant to sit underneath the practice canvas.
#[component]
pub fn StrokeOrderGuide(
	#[prop(into)] character: Signal<String>,
	#[prop(into)] opacity: Signal<f32>,
	#[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
	let src = Memo::new(move |_| character.with(|c| guide_path(c)));
	let style = move || {
		let opacity = if visible.get() { opacity.get() } else { 0.0 };
		format!("opacity: {opacity}")
	};

	view! {
		<Show when=move || src.with(Option::is_some)>
			<img
				class="StrokeOrderGuide"
				src=move || src.get().unwrap_or_default()
				alt=move || format!("Stroke order for {}", character.get())
				style=style
				draggable="false"
			/>
		</Show>
	}
}
