use crate::catalog::{kana_cells, JlptLevel, KanjiTable, Script, KANA_COLUMNS};
use crate::components::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_params_map};

/// Link target for practising `character`.
pub fn practice_path(character: char) -> String {
	format!("/practice/{}", urlencoding::encode(character.encode_utf8(&mut [0; 4])))
}

/// Percent-decodes a route parameter. Malformed input is used as-is.
pub fn decode_param(raw: &str) -> String {
	match urlencoding::decode(raw) {
		Ok(decoded) => decoded.into_owned(),
		Err(error) => {
			tracing::warn!(raw, %error, "route parameter is not valid percent-encoded UTF-8");
			raw.to_owned()
		}
	}
}

const KANJI_COLUMNS: usize = 10;

#[component]
pub fn Home() -> impl IntoView {
	let table: KanjiTable = expect_context();

	let kana = [Script::Hiragana, Script::Katakana]
		.into_iter()
		.map(|script| {
			view! {
				<Panel title=script.to_string()>
					<CharacterGrid cells=kana_cells(script) columns=KANA_COLUMNS/>
				</Panel>
			}
		})
		.collect_view();

	let kanji = JlptLevel::DESCENDING
		.iter()
		.map(|&level| {
			let cells = table.by_level(level).map(Some).collect::<Vec<_>>();
			let caption = format!("{} characters", cells.len());
			view! {
				<Panel title=format!("JLPT {level} Kanji") caption>
					<CharacterGrid cells columns=KANJI_COLUMNS/>
				</Panel>
			}
		})
		.collect_view();

	view! {
		<Title text="Home"/>
		<div class="Home">
			<h1>"Japanese Writing Practice"</h1>
			{kana}
			{kanji}
		</div>
	}
}

#[component]
pub fn Practice() -> impl IntoView {
	let params = use_params_map();
	let character = Signal::derive(move || {
		params
			.read()
			.get("char")
			.map(|raw| decode_param(&raw))
			.unwrap_or_default()
	});

	view! {
		<Title text=move || format!("Practise {}", character.get())/>
		<div class="Practice">
			<h1 class="Breadcrumb">
				<A href="/">"Japanese Writing Practice"</A>
				" > "
				<span class="PracticeCharacter">{character}</span>
			</h1>
			<WritingPractice character/>
			<A href="/">"Go back"</A>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get_untracked();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}
