// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use corpus_index::config::DEFAULT_CONFIG_PATH;
use corpus_index::utils::logging::{
    format_error, format_info, format_step, format_success, format_warning,
};
use corpus_index::{
    BuildProgress, Config, Corpus, CorpusLoader, IndexError, InvertedIndex, OperationTimer,
    QueryResult, ReportExporter, RetrievalReport, SourceFormat, Validator,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "corpus_index")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Inverted index and term lookup over labeled text datasets", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Corpus file, overriding corpus.path
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Source format (csv or jsonl), overriding extension detection
    #[arg(long, value_name = "FORMAT")]
    format: Option<SourceFormat>,

    /// Name of the text-bearing column
    #[arg(long, value_name = "NAME")]
    column: Option<String>,

    /// Hide the index build progress bar
    #[arg(long, action = ArgAction::SetTrue)]
    no_progress: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the configured example queries (default)
    Demo {
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// Look up one or more terms
    Query {
        #[arg(required = true)]
        terms: Vec<String>,

        #[arg(short, long, value_name = "NUM")]
        limit: Option<usize>,

        /// Print the text of the first matching document, overriding
        /// query.show_first_document
        #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
        show_text: Option<bool>,

        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// Print corpus and index statistics
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    corpus_index::utils::logging::init_logger(cli.color, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<IndexError>() {
                Some(index_err) => {
                    eprintln!(
                        "{}",
                        format_error(&format!("Error [{}]: {}", index_err.kind(), index_err))
                    );
                    if index_err.is_load_failure() {
                        eprintln!("{}", format_warning("Corpus not loaded; no index was built."));
                    }
                }
                None => eprintln!("{}", format_error(&format!("Error: {:#}", err))),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("Corpus index");

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(input) = cli.input {
        config.corpus.path = input;
    }
    if let Some(format) = cli.format {
        config.corpus.format = Some(format);
    }
    if let Some(column) = cli.column {
        config.corpus.text_column = column;
    }
    config.validate()?;

    let show_progress = !cli.no_progress;
    let (corpus, index) = load_and_build(&config, show_progress, cli.color)?;

    match cli.command.unwrap_or(Commands::Demo {
        export: None,
        pretty: false,
    }) {
        Commands::Demo { export, pretty } => {
            let terms = config.query.terms.clone();
            cmd_query(
                &config,
                &corpus,
                &index,
                &terms,
                config.query.display_limit,
                config.query.show_first_document,
                export,
                pretty,
            )?;
        }
        Commands::Query {
            terms,
            limit,
            show_text,
            export,
            pretty,
        } => {
            let limit = limit.unwrap_or(config.query.display_limit);
            Validator::validate_display_limit(limit)?;
            cmd_query(
                &config,
                &corpus,
                &index,
                &terms,
                limit,
                resolve_show_text(show_text, &config),
                export,
                pretty,
            )?;
        }
        Commands::Stats => {
            cmd_stats(&corpus, &index);
        }
    }

    Ok(())
}

fn load_and_build(
    config: &Config,
    show_progress: bool,
    colored: bool,
) -> Result<(Corpus, InvertedIndex)> {
    let loader = CorpusLoader::new(config.corpus.text_column.clone());
    debug!("Indexing text column '{}'", loader.text_column());

    let timer = OperationTimer::new("corpus load");
    let corpus = loader.load(&config.corpus.path, config.corpus.format)?;
    timer.finish_with_count(corpus.len(), "documents");

    let progress = if show_progress {
        BuildProgress::with_color(corpus.len(), colored)
    } else {
        BuildProgress::hidden(corpus.len())
    };

    let timer = OperationTimer::new("index build");
    let index = InvertedIndex::build_with_progress(&corpus, &progress);
    timer.finish_with_count(index.vocabulary_size(), "terms");

    let stats = progress.get_stats();
    debug!(
        "Indexed {} documents ({:.0} docs/sec)",
        stats.documents_indexed,
        stats.documents_per_second()
    );

    Ok((corpus, index))
}

#[allow(clippy::too_many_arguments)]
fn cmd_query(
    config: &Config,
    corpus: &Corpus,
    index: &InvertedIndex,
    terms: &[String],
    limit: usize,
    show_text: bool,
    export: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    println!("\n--- Inverted Index Retrieval ---");
    println!("Total documents in corpus: {}", corpus.len());
    println!("Total unique terms in index: {}", index.vocabulary_size());

    let results: Vec<QueryResult> = terms.iter().map(|term| index.retrieve(term)).collect();

    for (position, result) in results.iter().enumerate() {
        print_result(
            position + 1,
            results.len(),
            result,
            corpus,
            limit,
            show_text.then_some(config.query.preview_chars),
        );
    }

    if let Some(path) = export {
        let report = RetrievalReport::new(corpus.source(), index, &results, None);
        let exporter = ReportExporter::new(path)?;
        exporter
            .export(&report, pretty)
            .context("Failed to export retrieval report")?;
        println!(
            "\n{}",
            format_success(&format!(
                "Report written to {}",
                exporter.output_path().display()
            ))
        );
    }

    Ok(())
}

fn print_result(
    step: usize,
    total: usize,
    result: &QueryResult,
    corpus: &Corpus,
    limit: usize,
    preview_chars: Option<usize>,
) {
    println!(
        "\n{}",
        format_step(step, total, &format!("Searching for term: '{}'", result.query))
    );

    if result.is_empty() {
        println!("{}", format_warning("Found in 0 documents."));
        return;
    }

    println!("Found in {} documents.", result.match_count());

    let shown = result.preview(limit);
    if result.is_truncated(limit) {
        println!(
            "Matching document ids: {:?}... (showing first {} ids)",
            shown,
            shown.len()
        );
    } else {
        println!("Matching document ids: {:?}", shown);
    }

    if let Some(max_chars) = preview_chars
        && let Some(doc) = result.first_document(corpus)
    {
        println!(
            "{}",
            format_info(&format!(
                "Document {}: {}",
                doc.id,
                Validator::truncate_text(&doc.text, max_chars)
            ))
        );
    }
}

fn cmd_stats(corpus: &Corpus, index: &InvertedIndex) {
    let stats = index.stats();

    println!("\n--- Index Statistics ---");
    if let Some(source) = corpus.source() {
        println!("Source: {}", source.display());
    }
    println!("Documents: {}", stats.documents);
    println!("Unique terms: {}", stats.vocabulary);
    println!("Postings: {}", stats.postings);
    println!("Average distinct terms per document: {:.2}", stats.avg_terms_per_doc);

    let missing = corpus.iter().filter(|doc| doc.is_missing()).count();
    if missing > 0 {
        println!(
            "{}",
            format_warning(&format!("{} documents have missing text", missing))
        );
    }
}

fn resolve_show_text(flag: Option<bool>, config: &Config) -> bool {
    flag.unwrap_or(config.query.show_first_document)
}
