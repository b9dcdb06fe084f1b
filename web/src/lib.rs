use anyhow::{Context, anyhow};
use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod loader;
mod utils;

/// Shown in place of the app when startup fails.
pub(crate) const FATAL_MESSAGE: &str = "Failed to load, please reload the page.";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to fetch the newline-delimited item list from
    #[arg(short, long, default_value = loader::DEFAULT_ITEMS_URL)]
    items: String,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#-vv&--seed=42`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once(env!("CARGO_PKG_NAME")).chain(args))
    }
}

fn start() -> anyhow::Result<()> {
    use gloo::utils::{document, window};

    let location_hash = window().location().hash().unwrap_or_default();
    let args = Args::from_location_hash(&location_hash).context("Could not parse args")?;

    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level)
            .map_err(|err| anyhow!("Error initializing logger: {}", err))?;
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .context("Could not find id=\"game\" element")?;

    let props = game::GameProps {
        items_url: args.items.into(),
        seed: args.seed,
    };
    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    if let Err(err) = start() {
        gloo::console::error!(format!("{:#}", err));
        if let Some(body) = gloo::utils::document().body() {
            body.set_text_content(Some(FATAL_MESSAGE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.seed, None);
        assert_eq!(args.items, loader::DEFAULT_ITEMS_URL);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Warn));
    }

    #[test]
    fn hash_carries_seed_and_items() {
        let args = Args::from_location_hash("#--seed=42&--items=lists/park.txt&-v").unwrap();

        assert_eq!(args.seed, Some(42));
        assert_eq!(args.items, "lists/park.txt");
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Args::from_location_hash("#--seed=nope").is_err());
    }
}
