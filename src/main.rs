use kakitori::config::PracticeConfig;
use leptos::prelude::*;

#[derive(thiserror::Error, Debug)]
#[error("no global tracing subscriber set")]
struct NoTracingSubscriber;

fn configure_tracing() -> anyhow::Result<()> {
	let result = Err(NoTracingSubscriber);

	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	let result = result.or_else(|_| tracing_wasm::try_set_as_global_default());

	let result = result.or_else(|_| {
		let max_level = if cfg!(debug_assertions) {
			tracing::Level::TRACE
		} else {
			tracing::Level::INFO
		};
		tracing::subscriber::set_global_default(
			tracing_subscriber::FmtSubscriber::builder()
				.with_max_level(max_level)
				.finish(),
		)
	});

	Ok(result?)
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`. If setting the subscriber failed above, the "log" feature on
	// `tracing` sends events the other way instead.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

/// Build-time overrides on top of the defaults.
fn load_config() -> anyhow::Result<PracticeConfig> {
	let config = PracticeConfig::default()
		.with_overrides(PracticeConfig::build_overrides())?
		.validated()?;
	tracing::debug!(?config, "loaded config");
	Ok(config)
}

fn main() {
	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	console_error_panic_hook::set_once();

	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		tracing::error!(error = error.to_string());
	}

	let config = load_config().unwrap_or_else(|error| {
		tracing::error!(%error, "invalid configuration, using defaults");
		PracticeConfig::default()
	});

	mount_to_body(move || view! { <kakitori::App config/> })
}
