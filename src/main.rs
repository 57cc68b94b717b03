#![deny(unsafe_code)]

mod cli;
mod svg;

use anyhow::Context;
use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use chaikin::Scene;
use svg::SVG;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut scene = Scene::demo(args.settings())?;
    for &command in args.commands.iter() {
        let step = scene.apply(command);
        tracing::info!(
            ?command,
            ?step,
            iterations = scene.iterations(),
            corners = scene.corner_count(),
            "Applied command"
        );
    }

    let document = SVG::from_scene(&scene).to_string();
    match &args.output {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", document),
    }
    Ok(())
}
