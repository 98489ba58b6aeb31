//! Command-line front end for the cubeviz NxNxN cube engine.

mod cli;
mod settings;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;
    env_logger::builder().init();

    let settings = settings::Settings::load(args.config.as_deref())?;
    cli::exec(args.subcommand, &settings, args.format)
}
