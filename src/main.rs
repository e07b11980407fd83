mod ui;

use anyhow::Result;
use clap::{ArgAction, Parser};
use fortress::{CharacterCategory, GenerationRequest, GenerationResult};
use log::info;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "fortress",
    version,
    about = "Cryptographically secure password generator with entropy scoring"
)]
struct Cli {
    #[arg(short, long, default_value_t = 16, value_parser = clap::value_parser!(u16).range(6..=64))]
    length: u16,

    #[arg(long)]
    no_upper: bool,

    #[arg(long)]
    no_lower: bool,

    #[arg(long)]
    no_digits: bool,

    #[arg(long)]
    no_symbols: bool,

    /// Leave out 1, l, I, |, 0 and O
    #[arg(short = 'x', long)]
    exclude_ambiguous: bool,

    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    count: u16,

    #[arg(short, long)]
    quiet: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn request(&self) -> GenerationRequest {
        GenerationRequest::new(usize::from(self.length))
            .with(CharacterCategory::Lowercase, !self.no_lower)
            .with(CharacterCategory::Uppercase, !self.no_upper)
            .with(CharacterCategory::Digits, !self.no_digits)
            .with(CharacterCategory::Symbols, !self.no_symbols)
            .exclude_ambiguous(self.exclude_ambiguous)
    }
}

fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let request = cli.request();
    info!(
        "Generating {} password(s) of length {}",
        cli.count, request.length
    );

    let mut passwords = Vec::with_capacity(usize::from(cli.count));
    for _ in 0..cli.count {
        match request.generate()? {
            GenerationResult::Success(generated) => passwords.push(generated),
            GenerationResult::Failure(reason) => {
                ui::display_failure(reason, &options)?;
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    ui::display_passwords(&passwords, &request, &options);

    Ok(ExitCode::SUCCESS)
}
