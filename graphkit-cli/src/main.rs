mod app;
mod commands;
mod output;

use anyhow::Context;
use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .context("failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    // Show graphkit info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("graphkit", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Show { path } => commands::show::run(path, &cli.global),
        Command::Dot { path, title } => commands::show::run_dot(path, title.as_deref()),
        Command::Bfs { path, start } => {
            commands::traverse::run(path, start, commands::traverse::Order::Bfs, &cli.global)
        }
        Command::Dfs { path, start } => {
            commands::traverse::run(path, start, commands::traverse::Order::Dfs, &cli.global)
        }
        Command::Toposort { path, method } => commands::toposort::run(path, *method, &cli.global),
        Command::Shortest {
            path,
            start,
            algorithm,
            to,
        } => commands::shortest::run(path, start, *algorithm, to.as_deref(), &cli.global),
        Command::AllPairs { path } => commands::shortest::run_all_pairs(path, &cli.global),
        Command::Mst {
            path,
            algorithm,
            start,
        } => commands::mst::run(path, *algorithm, start.as_deref(), &cli.global),
        Command::Cycles { path } => commands::structure::run_cycles(path, &cli.global),
        Command::Components { path } => commands::structure::run_components(path, &cli.global),
        Command::Demo => commands::demo::run(&cli.global),
    }
}
