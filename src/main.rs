//! # Queryline Main Entry Point
//!
//! Small CLI driver around the search state component: fetch the field
//! schema, optionally run one query, and print the outcome the way the
//! view layer would render it.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use queryline::cmd_args::CommandLineArgs;
use queryline::{HttpTransport, SearchState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();
    tracing::info!(base_url = args.base_url(), "starting queryline");

    let transport = Arc::new(HttpTransport::new(args.base_url()));
    let mut state = SearchState::new(transport);

    state.load_fields();
    state.process_completion().await;

    if state.is_error() {
        eprintln!("error: {}", state.error_message());
        std::process::exit(1);
    }

    if args.query().is_none() {
        println!("Available fields:");
        for field in state.fields() {
            println!("  {:<16} {}", field.label(), field.description);
        }
    }

    if let Some(query) = args.query() {
        state.set_query(query);
        state.search();
        state.process_completion().await;

        if state.is_error() {
            eprintln!("error: {}", state.error_message());
            std::process::exit(1);
        }

        if state.has_results() {
            let columns: Vec<String> =
                state.fields().iter().map(|f| f.name.clone()).collect();
            println!("{}", columns.join("\t"));
            for record in state.results() {
                let row: Vec<String> = columns
                    .iter()
                    .map(|column| state.get_value(column, record))
                    .collect();
                println!("{}", row.join("\t"));
            }
        } else {
            println!("No results for '{query}'");
        }
    }

    Ok(())
}
