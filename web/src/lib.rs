use clap::Parser;
use wasm_bindgen::prelude::*;

mod button;
mod game;
mod platform;
mod settings;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

/// Reads arguments out of a location hash such as `#--seed=42&--difficulty=hard&-vv`.
///
/// Unparsable input falls back to the defaults, the error is handed back so it
/// can be logged once logging is up.
fn parse_args(location_hash: &str) -> (Args, Option<clap::Error>) {
    let args = std::iter::once("").chain(
        location_hash
            .split(['#', '&'])
            .filter(|arg| !arg.is_empty()),
    );
    match Args::try_parse_from(args) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let (args, parse_error) = parse_args(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring start-up arguments: {}", err);
    }

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
