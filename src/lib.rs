pub(crate) mod util;

pub mod catalog;
mod components;
pub mod config;
pub mod engine;
pub mod geom;
pub mod guide;
mod pages;
pub mod painter;

use catalog::KanjiTable;
use config::PracticeConfig;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;
use util::ResultExt;

#[component]
pub fn App(#[prop(optional)] config: PracticeConfig) -> impl IntoView {
	provide_meta_context();
	provide_context(config);
	// Without the table the home page just lists kana.
	provide_context(KanjiTable::bundled().ok_or_log().unwrap_or_default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light"/>

		<Title formatter=|page| format!("Kakitori - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>
		<Meta
			name="description"
			content="Practise writing Japanese kana and kanji by tracing their stroke order."
		/>

		<ConfigProvider>
			<Router>
				<Routes fallback=|| view! { <pages::NotFound/> }>
					<Route path=path!("/") view=pages::Home/>
					<Route path=path!("/practice/:char") view=pages::Practice/>
				</Routes>
			</Router>
		</ConfigProvider>
	}
}
