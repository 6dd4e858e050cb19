use leptos::prelude::*;
use thaw::{Body1, Caption1, Card, CardHeader, CardPreview};

#[component]
pub fn Panel(
	#[prop(into)] title: String,
	#[prop(optional, into)] caption: Option<String>,
	children: Children,
) -> impl IntoView {
	view! {
		<Card class="Panel">
			<CardHeader>
				<Body1>
					<b>{title}</b>
				</Body1>
			</CardHeader>
			{caption.map(|caption| view! { <Caption1>{caption}</Caption1> })}
			<CardPreview>
				{children()}
			</CardPreview>
		</Card>
	}
}
