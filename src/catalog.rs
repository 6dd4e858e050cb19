//! The characters offered for practice.

use derive_more::Display;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
	Hiragana,
	Katakana,
}

/// Cells per row of the kana table.
pub const KANA_COLUMNS: usize = 5;

/// Gojūon rows for the vowel, k, s, t, n, h, m, y and r columns. The y row has no yi or ye.
#[cfg_attr(rustfmt, rustfmt_skip)]
const HIRAGANA_ROWS: [[Option<char>; KANA_COLUMNS]; 9] = [
	[Some('あ'), Some('い'), Some('う'), Some('え'), Some('お')],
	[Some('か'), Some('き'), Some('く'), Some('け'), Some('こ')],
	[Some('さ'), Some('し'), Some('す'), Some('せ'), Some('そ')],
	[Some('た'), Some('ち'), Some('つ'), Some('て'), Some('と')],
	[Some('な'), Some('に'), Some('ぬ'), Some('ね'), Some('の')],
	[Some('は'), Some('ひ'), Some('ふ'), Some('へ'), Some('ほ')],
	[Some('ま'), Some('み'), Some('む'), Some('め'), Some('も')],
	[Some('や'), None,      Some('ゆ'), None,      Some('よ')],
	[Some('ら'), Some('り'), Some('る'), Some('れ'), Some('ろ')],
];

/// Trailing rows, laid out back to back after the gojūon grid.
const HIRAGANA_TAIL: [char; 3] = ['わ', 'を', 'ん'];

/// Hiragana and katakana blocks are parallel, 0x60 code points apart.
const KATAKANA_OFFSET: u32 = 0x60;

pub fn to_katakana(c: char) -> char {
	match c {
		'\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c),
		_ => c,
	}
}

/// The kana table in row-major order, `None` marking gaps, to be laid out `KANA_COLUMNS` wide.
pub fn kana_cells(script: Script) -> Vec<Option<char>> {
	let convert = |c: char| match script {
		Script::Hiragana => c,
		Script::Katakana => to_katakana(c),
	};
	HIRAGANA_ROWS
		.iter()
		.flatten()
		.copied()
		.chain(HIRAGANA_TAIL.iter().copied().map(Some))
		.map(|cell| cell.map(convert))
		.collect()
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("N{_0}")]
pub struct JlptLevel(u8);

impl JlptLevel {
	/// Easiest first.
	pub const DESCENDING: [JlptLevel; 5] = [
		JlptLevel(5),
		JlptLevel(4),
		JlptLevel(3),
		JlptLevel(2),
		JlptLevel(1),
	];

	pub fn new(level: u8) -> Option<Self> {
		(1..=5).contains(&level).then_some(Self(level))
	}

	pub fn get(self) -> u8 {
		self.0
	}
}

#[derive(Debug, Error)]
pub enum KanjiDataError {
	#[error("malformed kanji table: {0}")]
	Json(#[from] serde_json::Error),
}

static_assertions::assert_impl_all!(KanjiDataError: std::error::Error, Send, Sync);

/// The subset of a kanji metadata record we use. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct KanjiRecord {
	#[serde(default)]
	jlpt_new: Option<u8>,
}

/// Kanji with their JLPT level, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KanjiTable {
	entries: Vec<(char, Option<JlptLevel>)>,
}

impl KanjiTable {
	/// Parses a JSON object mapping each kanji to a record with an optional `jlpt_new` level.
	pub fn from_json(json: &str) -> Result<Self, KanjiDataError> {
		let records: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
		let mut entries = Vec::with_capacity(records.len());
		for (key, record) in records {
			let mut chars = key.chars();
			let (Some(kanji), None) = (chars.next(), chars.next()) else {
				tracing::warn!(%key, "skipping kanji table key that is not a single character");
				continue;
			};
			let record: KanjiRecord = serde_json::from_value(record)?;
			let level = record.jlpt_new.and_then(|level| {
				let parsed = JlptLevel::new(level);
				if parsed.is_none() {
					tracing::warn!(%kanji, level, "ignoring out-of-range JLPT level");
				}
				parsed
			});
			entries.push((kanji, level));
		}
		tracing::debug!(entries = entries.len(), "loaded kanji table");
		Ok(Self { entries })
	}

	/// The table shipped with the application.
	pub fn bundled() -> Result<Self, KanjiDataError> {
		Self::from_json(include_str!("data/kanji.json"))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn by_level(&self, level: JlptLevel) -> impl Iterator<Item = char> + '_ {
		self
			.entries
			.iter()
			.filter(move |(_, l)| *l == Some(level))
			.map(|(kanji, _)| *kanji)
	}
}
