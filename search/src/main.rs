use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use vsm_search::{render_json, render_text, run, SearchConfig};

#[derive(Parser)]
#[command(name = "vsm")]
#[command(about = "Rank a directory of text documents against free-text queries", long_about = None)]
struct Cli {
    /// Directory holding the corpus files
    #[arg(long)]
    corpus: String,
    /// Query text; repeat to run several queries against one index
    #[arg(long, required = true)]
    query: Vec<String>,
    /// Number of ranked documents to print per query (at most 10)
    #[arg(long, default_value_t = 10)]
    top_k: usize,
    /// File extension of corpus documents
    #[arg(long, default_value = "txt")]
    extension: String,
    /// Print one JSON object per query instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = SearchConfig { extension: cli.extension, ..SearchConfig::new(cli.corpus, cli.query) }
        .with_top_k(cli.top_k);

    for report in run(&config)? {
        if cli.json {
            println!("{}", render_json(&report)?);
        } else {
            print!("{}", render_text(&report));
        }
    }
    Ok(())
}
