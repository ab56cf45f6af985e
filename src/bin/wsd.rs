//! CLI entry point for the `wsd` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use resnik_wsd::cli::commands;
use resnik_wsd::config::{load_config, OutputFormat, RunConfig, RunOverrides};
use resnik_wsd::WsdError;

#[derive(Parser)]
#[command(
    name = "wsd",
    about = "Noun sense disambiguation with Resnik similarity over a WordNet-style taxonomy"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, global = true)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Taxonomy inputs shared by the inspection commands.
#[derive(Args)]
struct TaxonomyArgs {
    /// Path to the JSON taxonomy file
    #[arg(long)]
    taxonomy: PathBuf,
    /// Path to an IC counts file
    #[arg(long)]
    ic: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Disambiguate every probe record and correlate pair scores with human judgments
    Run {
        /// TOML config file; flags below override its values
        #[arg(long)]
        config: Option<PathBuf>,
        /// Path to the JSON taxonomy file
        #[arg(long)]
        taxonomy: Option<PathBuf>,
        /// Path to an IC counts file
        #[arg(long)]
        ic: Option<PathBuf>,
        /// Probe test file (probe<TAB>ctx,ctx,...)
        #[arg(long)]
        probes: Option<PathBuf>,
        /// Human judgment file (word1,word2,score)
        #[arg(long)]
        judgments: Option<PathBuf>,
        /// Report file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Score judgment pairs with an unknown word as 0 instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Disambiguate one probe word against a comma-separated context
    Disambiguate {
        #[command(flatten)]
        taxonomy: TaxonomyArgs,
        /// The probe word
        probe: String,
        /// Comma-separated context words
        context: String,
    },
    /// Resnik similarity between two words
    Similarity {
        #[command(flatten)]
        taxonomy: TaxonomyArgs,
        word1: String,
        word2: String,
    },
    /// List the noun senses of a word
    Senses {
        #[command(flatten)]
        taxonomy: TaxonomyArgs,
        word: String,
    },
    /// Display information about a taxonomy
    Info {
        #[command(flatten)]
        taxonomy: TaxonomyArgs,
    },
    /// Export the taxonomy with IC applied as JSON
    Export {
        #[command(flatten)]
        taxonomy: TaxonomyArgs,
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn init_logging(verbose: bool, level: Option<&str>) {
    let default = if verbose {
        "debug"
    } else {
        level.unwrap_or("warn")
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}

fn exit_code(err: &WsdError) -> i32 {
    match err.root() {
        WsdError::Io(_) => 1,
        WsdError::MalformedRecord { .. }
        | WsdError::Json(_)
        | WsdError::UnknownSynset(_)
        | WsdError::DuplicateSynset(_)
        | WsdError::CyclicHierarchy(_) => 2,
        WsdError::Config(_) => 3,
        WsdError::NoSenseFound { .. } | WsdError::NoSenseSelectable { .. } => 4,
        _ => 5,
    }
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_deref().map(OutputFormat::parse).transpose() {
        Ok(format) => format == Some(OutputFormat::Json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    };

    let file_config: Option<RunConfig> = match &cli.command {
        Commands::Run {
            config: Some(path), ..
        } => match load_config(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(exit_code(&e));
            }
        },
        _ => None,
    };
    init_logging(
        cli.verbose,
        file_config.as_ref().and_then(|c| c.log_level.as_deref()),
    );

    let result = match cli.command {
        Commands::Run {
            config: _,
            taxonomy,
            ic,
            probes,
            judgments,
            output,
            lenient,
        } => {
            let mut run_config = file_config.unwrap_or_default();
            run_config.merge(RunOverrides {
                taxonomy,
                information_content: ic,
                probes,
                judgments,
                output,
                format: cli.format,
                skip_unknown: lenient,
            });
            commands::cmd_run(&run_config)
        }
        Commands::Disambiguate {
            taxonomy,
            probe,
            context,
        } => {
            let words: Vec<String> = context
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
            commands::cmd_disambiguate(
                &taxonomy.taxonomy,
                taxonomy.ic.as_deref(),
                &probe,
                &words,
                json,
            )
        }
        Commands::Similarity {
            taxonomy,
            word1,
            word2,
        } => commands::cmd_similarity(
            &taxonomy.taxonomy,
            taxonomy.ic.as_deref(),
            &word1,
            &word2,
            json,
        ),
        Commands::Senses { taxonomy, word } => {
            commands::cmd_senses(&taxonomy.taxonomy, taxonomy.ic.as_deref(), &word, json)
        }
        Commands::Info { taxonomy } => {
            commands::cmd_info(&taxonomy.taxonomy, taxonomy.ic.as_deref(), json)
        }
        Commands::Export {
            taxonomy,
            output,
            pretty,
        } => commands::cmd_export(
            &taxonomy.taxonomy,
            taxonomy.ic.as_deref(),
            output.as_deref(),
            pretty,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}
