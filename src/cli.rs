/// CLI argument parsing and help text
use std::path::PathBuf;

use crate::config::NormalizerConfig;
use crate::error::{NormalizerError, Result};
use crate::models::{AbbreviationMode, ContractionMode, ProcessingMode, ProcessingOptions};

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Porua Normalizer v{}", version);
    println!("Rewrites text so a speech engine reads it naturally");
    println!();
    println!("USAGE:");
    println!("    porua_normalize [OPTIONS] [TEXT]");
    println!();
    println!("    Reads TEXT from standard input when no TEXT argument is given.");
    println!();
    println!("OPTIONS:");
    println!("    --mode <MODE>             basic, standard, enhanced or premium (default: enhanced)");
    println!("    --contractions <MODE>     natural, phonetic, expanded or hybrid (default: hybrid)");
    println!("    --abbreviations <MODE>    spell_out, expand or hybrid (default: hybrid)");
    println!("    --dictionary <FILE>       JSON dictionary merged over the built-in tables");
    println!("    --json                    Print the full result as JSON");
    println!("    -h, --help                Print this help message");
    println!("    -v, --version             Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    porua_normalize \"It costs $1,234.56\"");
    println!();
    println!("    # Spell out every acronym and print changes and markers");
    println!("    porua_normalize --mode premium --abbreviations spell_out --json \"ASAP!\"");
    println!();
    println!("    echo \"Meet me at 14:30 on 2024-12-25\" | porua_normalize");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    NORMALIZER_MAX_TEXT_LENGTH      - Longest accepted input in characters (default: 10000)");
    println!("    NORMALIZER_MODE                 - Default processing mode");
    println!("    NORMALIZER_CONTRACTION_MODE     - Default contraction handling");
    println!("    NORMALIZER_ABBREVIATION_MODE    - Default abbreviation handling");
    println!("    NORMALIZER_DICTIONARY_FILE      - JSON dictionary overrides");
    println!("    NORMALIZER_LOG_LEVEL            - Log level (error/warn/info/debug/trace)");
    println!("    NORMALIZER_LOG_DIR              - Write a daily-rotated JSON log here");
    println!("    NORMALIZER_LOG_FORMAT           - Console format (compact/pretty/json)");
    println!("    RUST_LOG                        - Overrides the console log filter");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can also be placed in a .env file in the current directory.");
}

pub fn print_version() {
    println!("Porua Normalizer v{}", env!("CARGO_PKG_VERSION"));
}

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    Normalize(CliArgs),
}

/// Parsed normalization arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub mode: Option<ProcessingMode>,
    pub contraction_mode: Option<ContractionMode>,
    pub abbreviation_mode: Option<AbbreviationMode>,
    pub dictionary: Option<PathBuf>,
    pub json: bool,
    /// Text given on the command line; `None` means read stdin
    pub text: Option<String>,
}

/// Parse arguments, not including the program name
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut parsed = CliArgs::default();
    let mut words: Vec<&str> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--json" => parsed.json = true,
            "--mode" => parsed.mode = Some(value(&mut iter, arg)?.parse()?),
            "--contractions" => parsed.contraction_mode = Some(value(&mut iter, arg)?.parse()?),
            "--abbreviations" => {
                parsed.abbreviation_mode = Some(value(&mut iter, arg)?.parse()?)
            }
            "--dictionary" => parsed.dictionary = Some(PathBuf::from(value(&mut iter, arg)?)),
            "--" => {
                words.extend(iter.by_ref().map(String::as_str));
                break;
            }
            flag if flag.starts_with("--") => {
                return Err(NormalizerError::InvalidOptions(format!(
                    "unknown option '{}'",
                    flag
                )))
            }
            word => words.push(word),
        }
    }

    if !words.is_empty() {
        parsed.text = Some(words.join(" "));
    }
    Ok(Command::Normalize(parsed))
}

fn value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a String> {
    iter.next()
        .ok_or_else(|| NormalizerError::InvalidOptions(format!("{} needs a value", flag)))
}

impl CliArgs {
    /// Apply command-line overrides on top of the environment configuration
    pub fn apply_to(&self, config: &mut NormalizerConfig) {
        if let Some(mode) = self.mode {
            config.default_mode = mode;
        }
        if let Some(mode) = self.contraction_mode {
            config.contraction_mode = mode;
        }
        if let Some(mode) = self.abbreviation_mode {
            config.abbreviation_mode = mode;
        }
        if let Some(path) = &self.dictionary {
            config.dictionary_file = Some(path.clone());
        }
    }

    /// Options for this run
    pub fn options(&self, config: &NormalizerConfig) -> Result<ProcessingOptions> {
        ProcessingOptions::builder()
            .mode(self.mode.unwrap_or(config.default_mode))
            .contraction_mode(self.contraction_mode.unwrap_or(config.contraction_mode))
            .abbreviation_mode(self.abbreviation_mode.unwrap_or(config.abbreviation_mode))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn normalize_args(list: &[&str]) -> CliArgs {
        match parse_args(&args(list)).unwrap() {
            Command::Normalize(parsed) => parsed,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["-v"])).unwrap(), Command::Version);
        assert_eq!(
            parse_args(&args(&["--json", "-h", "text"])).unwrap(),
            Command::Help
        );
    }

    #[test]
    fn test_all_options() {
        let parsed = normalize_args(&[
            "--mode",
            "premium",
            "--contractions",
            "expanded",
            "--abbreviations",
            "spell_out",
            "--dictionary",
            "dict.json",
            "--json",
            "Hello",
            "world",
        ]);

        assert_eq!(parsed.mode, Some(ProcessingMode::Premium));
        assert_eq!(parsed.contraction_mode, Some(ContractionMode::Expanded));
        assert_eq!(parsed.abbreviation_mode, Some(AbbreviationMode::SpellOut));
        assert_eq!(parsed.dictionary, Some(PathBuf::from("dict.json")));
        assert!(parsed.json);
        assert_eq!(parsed.text.as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_no_text_means_stdin() {
        let parsed = normalize_args(&["--mode", "basic"]);
        assert!(parsed.text.is_none());
    }

    #[test]
    fn test_double_dash_ends_options() {
        let parsed = normalize_args(&["--", "--json", "is", "text"]);
        assert!(!parsed.json);
        assert_eq!(parsed.text.as_deref(), Some("--json is text"));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(parse_args(&args(&["--mode"])).is_err());
        assert!(parse_args(&args(&["--mode", "turbo"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = NormalizerConfig::default();
        let parsed = normalize_args(&["--mode", "basic", "--dictionary", "d.json"]);
        parsed.apply_to(&mut config);

        assert_eq!(config.default_mode, ProcessingMode::Basic);
        assert_eq!(config.dictionary_file, Some(PathBuf::from("d.json")));

        let options = parsed.options(&config).unwrap();
        assert_eq!(options.mode(), ProcessingMode::Basic);
    }
}
