mod error;
mod game;
mod prompt;
mod render;

use anyhow::{Context, Result};

use game::state::Rules;
use game::Ending;
use prompt::LinePrompter;
use render::Renderer;

fn main() -> Result<()> {
    // Logs go to stderr. Control verbosity with RUST_LOG:
    //   RUST_LOG=info   adventure   # rounds + transitions
    //   RUST_LOG=debug  adventure   # + every resolved choice
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let graph = game::graph::the_adventure();
    graph.validate().context("scenario graph is broken")?;

    let rules = Rules::default();
    let mut prompter = LinePrompter::stdio();
    let mut renderer = Renderer::stdout(rules.max_health);

    match game::run(&graph, &rules, &mut prompter, &mut renderer)? {
        Ending::Exit => std::process::exit(0),
        Ending::Win | Ending::Declined => Ok(()),
    }
}
