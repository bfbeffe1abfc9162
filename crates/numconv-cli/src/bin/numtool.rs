use std::io::{self, BufWriter};
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use numconv_cli::commands::{check_ops, config_ops, convert_ops};
use numconv_cli::die;
use numconv_cli::trace_init::init_tracing;
use numconv_core::Language;

#[derive(Parser)]
#[command(name = "numtool", about = "Chinese/Japanese numeral normalizer")]
struct Cli {
    /// Settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert numerals in TEXT, or in each line of stdin
    Convert {
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
        /// Language: chinese/zh or japanese/ja
        #[arg(short, long)]
        lang: Option<Language>,
    },
    /// Run a TOML corpus of input/expected cases
    Check {
        /// Path to the corpus TOML file
        corpus_file: String,
        /// Only run cases in this language
        #[arg(short, long)]
        lang: Option<Language>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export or validate settings files
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the embedded default settings
    Export,
    /// Check that a settings file parses and validates
    Validate {
        /// Settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let settings = config_ops::load_settings(cli.settings.as_deref());
    init_tracing(&settings.trace.filter, cli.log_json);

    match cli.command {
        Command::Convert { text, lang } => {
            let lang = lang.unwrap_or(settings.convert.language);
            match text {
                Some(text) => println!("{}", convert_ops::convert_text(text.as_bytes(), lang)),
                None => {
                    let stdin = io::stdin().lock();
                    let stdout = BufWriter::new(io::stdout().lock());
                    die!(
                        convert_ops::convert_stream(stdin, stdout, lang),
                        "Error converting stdin: {}"
                    );
                }
            }
        }

        Command::Check {
            corpus_file,
            lang,
            verbose,
            json,
        } => {
            let corpus = die!(check_ops::load_corpus(Path::new(&corpus_file)), "Error: {}");
            let results = check_ops::run_corpus(&corpus, lang);
            if results.is_empty() {
                eprintln!("No cases match the given filters");
                process::exit(1);
            }
            if json {
                println!(
                    "{}",
                    die!(check_ops::format_json(&results), "JSON serialization failed: {}")
                );
            } else {
                print!("{}", check_ops::format_text(&results, verbose));
            }
            if check_ops::Summary::of(&results).fail > 0 {
                process::exit(1);
            }
        }

        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
