mod console;
mod engine;
mod error;
mod session;
mod story;

use std::io;

use anyhow::{Context, Result};

use console::{ConsoleInput, Presenter};
use story::forest::enchanted_forest;

fn main() -> Result<()> {
    // Initialize logging. Control verbosity with RUST_LOG env var:
    //   RUST_LOG=info  cargo run   # transitions + session events
    //   RUST_LOG=debug cargo run   # + raw player input
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let graph = enchanted_forest();
    graph
        .validate()
        .context("the built-in story failed integrity validation")?;

    let mut input = ConsoleInput;
    let mut presenter = Presenter::new(io::stdout().lock());

    session::run(&graph, &mut input, &mut presenter)
}
