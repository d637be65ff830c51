use clap::Parser;
use std::process::ExitCode;

use lct_cli::cli::commands::{configure, models, translate};
use lct_cli::cli::{Args, Command};
use lct_cli::error::exit_code_for;
use lct_cli::logger;
use lct_cli::output::{self, OutputConfig};
use lct_cli::ui::Style;

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Models { all }) => {
            models::print_models(models::ModelsOptions {
                base_url: args.base_url,
                all,
            })
            .await
        }
        Some(Command::Configure { show }) => configure::run_configure(show),
        None => {
            let options = translate::TranslateOptions {
                text: args.joined_text(),
                base_url: args.base_url,
                model: args.model,
            };
            translate::run_translate(options).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    if let Err(e) = logger::init(args.verbose, output::is_no_color()) {
        eprintln!("{} {e:#}", Style::warning("Warning:"));
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            ExitCode::from(u8::try_from(exit_code_for(&e)).unwrap_or(1))
        }
    }
}
