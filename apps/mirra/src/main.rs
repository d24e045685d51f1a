//! Mirra CLI binary entry point.
//! Parses flags, loads the config, builds the rsync command, runs it.

use clap::Parser;
use mirra::cli::{self, Cli};
use mirra::rsync::RunOptions;
use mirra::{config, rsync, runner, Error};
use owo_colors::OwoColorize;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        if std::env::var_os("NO_COLOR").is_none() {
            eprintln!("{} {err}", "error:".red().bold());
        } else {
            eprintln!("error: {err}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let (category, direction) = cli::parse_selection(&cli.args)?;

    let cfg_path = cli.config.unwrap_or_else(config::default_path);
    let cfg = config::load(&cfg_path)?;
    let cat = cfg
        .categories
        .get(&category)
        .ok_or_else(|| Error::CategoryNotFound(category.clone()))?;
    cfg.ssh.ensure_credentials()?;

    let opts = RunOptions {
        dry_run: cli.dry_run,
        delete: cli.delete,
        checksum: cli.checksum,
        no_verbose: cli.no_verbose,
        direction,
    };
    let args = rsync::build_args(&cfg, cat, &opts);
    runner::run(&args)
}
