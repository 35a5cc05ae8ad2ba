use clap::{Parser, Subcommand};

use gutenberg_explorer::analysis::{AnalysisClient, GroqCompletion};
use gutenberg_explorer::cache::BookCache;
use gutenberg_explorer::catalog;
use gutenberg_explorer::config::Config;
use gutenberg_explorer::fetcher;
use gutenberg_explorer::models::{AnalysisKind, ModelName};
use gutenberg_explorer::stage::{AnalyzeStage, FetchStage};

#[derive(Parser)]
#[command(
    name = "gutenberg-explorer",
    about = "Fetch, cache and analyze Project Gutenberg e-books"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a book by archive identifier and cache it locally
    Fetch {
        /// Numeric archive identifier, e.g. 1342 for Pride and Prejudice
        id: String,
    },
    /// List previously fetched books
    List,
    /// Run one of the canned analyses over a book (fetching it if needed)
    Analyze {
        /// Numeric archive identifier
        id: String,
        /// summary, sentiment or characters
        kind: String,
        /// llama3-70b-8192, mixtral-8x7b-32768 or gemma2-9b-it
        #[arg(long, default_value = "llama3-70b-8192")]
        model: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let cache = BookCache::new(&config.cache_dir)?;

    match cli.command {
        Command::Fetch { id } => {
            let id = fetcher::parse_identifier(&id)?;

            let result = fetcher::fetch(&config, &cache, id);
            FetchStage::update(&result);

            let book = result?;

            println!(
                "{} (ID: {})",
                book.title.as_deref().unwrap_or("(title unavailable)"),
                book.id
            );
            if let Some(ref author) = book.author {
                println!("by {}", author);
            }
            println!();
            println!("{}", book.preview(1000));
        }
        Command::List => {
            let books = catalog::list_cached_books(&cache)?;

            if books.is_empty() {
                println!("No books yet!");
            }

            for (id, title) in books {
                println!("{}\t{}", id, title.as_deref().unwrap_or("(title unavailable)"));
            }
        }
        Command::Analyze { id, kind, model } => {
            let kind = kind.parse::<AnalysisKind>().map_err(anyhow::Error::msg)?;
            let model = model.parse::<ModelName>().map_err(anyhow::Error::msg)?;
            let id = fetcher::parse_identifier(&id)?;

            let book = fetcher::fetch(&config, &cache, id)?;

            let api_key = config.require_api_key()?;
            let client = AnalysisClient::new(GroqCompletion::new(
                &config.completion_endpoint,
                api_key,
            ));

            let result = client.analyze(&book.text, kind, model);
            AnalyzeStage::update(&result);

            println!("{}", result?.text);
        }
    }

    Ok(())
}
