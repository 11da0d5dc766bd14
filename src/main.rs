use clap::Parser;
use color_analyzer::cli::{Cli, Commands};
use color_analyzer::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Analyze(args) => color_analyzer::cli::analyze::run(args, &printer)?,
        Commands::Dominant(args) => color_analyzer::cli::dominant::run(args, &printer)?,
        Commands::Palette(args) => color_analyzer::cli::palette::run(args, &printer)?,
        Commands::Serve(args) => color_analyzer::cli::serve::run(args, &printer)?,
        Commands::Completions(args) => color_analyzer::cli::completions::run(args)?,
    }

    Ok(())
}
