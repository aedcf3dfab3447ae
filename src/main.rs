use porua_normalizer::cli::{self, Command};
use porua_normalizer::config::NormalizerConfig;
use porua_normalizer::logging::{self, LogConfig};
use porua_normalizer::Normalizer;
use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    if let Err(e) = logging::init_logging(&LogConfig::from_env()) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    logging::log_platform_info();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let parsed = match cli::parse_args(&args)? {
        Command::Help => {
            cli::print_help();
            return Ok(());
        }
        Command::Version => {
            cli::print_version();
            return Ok(());
        }
        Command::Normalize(parsed) => parsed,
    };

    let mut config = NormalizerConfig::from_env();
    parsed.apply_to(&mut config);
    let options = parsed.options(&config)?;
    let normalizer = Normalizer::new(config)?;

    let text = match &parsed.text {
        Some(text) => text.clone(),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let result = normalizer.normalize(&text, &options)?;

    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }

    if parsed.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.processed_text);
    }

    Ok(())
}
