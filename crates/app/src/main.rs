mod prompt;

use chrono::Utc;
use clap::Parser;
use keyword_search_core::{
    split_comma_list, write_report, KeywordSource, NlpToolkit, SearchConfig, ToolkitOptions,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "keyword-search", version)]
struct Cli {
    /// Folder to search recursively. Prompts for every setting when omitted.
    #[arg(long)]
    directory: Option<PathBuf>,

    /// File extension including the leading dot, e.g. `.txt`, `.pdf`, `.docx`.
    #[arg(long, requires = "directory")]
    extension: Option<String>,

    /// File with one keyword per line.
    #[arg(long, conflicts_with = "keywords", requires = "directory")]
    keywords_file: Option<PathBuf>,

    /// Comma-separated keywords.
    #[arg(long, requires = "directory")]
    keywords: Option<String>,

    /// Comma-separated names to look for among named entities.
    #[arg(long, requires = "directory")]
    names: Option<String>,

    /// WordNet `dict/` directory used for lemmatization and synonyms.
    #[arg(long, env = "WORDNET_DIR")]
    wordnet_dir: Option<PathBuf>,

    /// JSON synonym table (`{"word": ["synonym", ...]}`).
    #[arg(long, env = "KEYWORD_SEARCH_THESAURUS")]
    thesaurus: Option<PathBuf>,

    /// Match keywords exactly as given, without synonym expansion.
    #[arg(long, default_value_t = false)]
    no_synonyms: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<(SearchConfig, ToolkitOptions)> {
        let toolkit = ToolkitOptions {
            wordnet_dir: self.wordnet_dir,
            thesaurus_path: self.thesaurus,
        };

        let mut config = match self.directory {
            Some(directory) => {
                let extension = self
                    .extension
                    .ok_or_else(|| anyhow::anyhow!("--extension is required with --directory"))?;
                let keywords = match (self.keywords_file, self.keywords) {
                    (Some(path), _) => KeywordSource::File(path),
                    (None, Some(list)) => KeywordSource::Inline(split_comma_list(&list)),
                    (None, None) => KeywordSource::default(),
                };
                let names = self
                    .names
                    .as_deref()
                    .map(split_comma_list)
                    .unwrap_or_default();

                SearchConfig::new(directory, extension)
                    .with_keywords(keywords)
                    .with_names(names)
            }
            None => prompt::interactive_config()?,
        };

        config.expand_synonyms = !self.no_synonyms;
        Ok((config, toolkit))
    }
}


fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let (config, toolkit_options) = Cli::parse().into_config()?;
    config.validate()?;

    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        directory = %config.directory.display(),
        extension = %config.extension,
        "keyword-search boot"
    );

    let searcher = NlpToolkit::load(&toolkit_options)?.into_searcher();
    let report = searcher.run(&config)?;

    if !report.skipped_files.is_empty() {
        warn!(
            "skipped_files={} of files_scanned={}",
            report.skipped_files.len(),
            report.files_scanned
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report.matches, &config.normalized_names())?;
    out.flush()?;

    Ok(())
}
