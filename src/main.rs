use clap::Parser;
use dotenv::dotenv;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{LevelFilter, warn};
use serde_json::json;
use tombola::{ApiResponse, DrawOutcome, ScrapingContext};

extern crate env_logger;
extern crate log;

/// Fetches lottery results and prints them as JSON, one line per query.
#[derive(Parser, Debug)]
#[command(name = "tombola", version)]
struct Cli {
    /// Queries as `<juego>/<fecha>`, e.g. `nacional/hoy`, `mendoza/2024-06-05`,
    /// `telekino/ultimo`, `quini6/ultimo`.
    #[arg(required = true)]
    consultas: Vec<String>,

    /// Pretty-print each response.
    #[arg(long)]
    pretty: bool,
}

async fn run_query(context: &ScrapingContext, consulta: String) -> (String, ApiResponse) {
    let (game, date) = consulta.split_once('/').unwrap_or((consulta.as_str(), ""));
    let result = context.dispatcher.query(game, date).await;
    let response = ApiResponse::from(&result);
    match DrawOutcome::from(result) {
        DrawOutcome::Empty => warn!("{consulta}: no draws published"),
        DrawOutcome::Failed(e) => warn!("{consulta}: {e}"),
        DrawOutcome::Populated(_) => {}
    }
    (consulta, response)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let context = ScrapingContext::new()?;

    let mut queries: FuturesUnordered<_> = cli
        .consultas
        .into_iter()
        .map(|consulta| run_query(&context, consulta))
        .collect();

    let mut failed = false;
    while let Some((consulta, response)) = queries.next().await {
        failed |= !response.is_success();
        let line = json!({
            "consulta": consulta,
            "status": response.status,
            "body": response.body,
        });
        if cli.pretty {
            println!("{}", serde_json::to_string_pretty(&line)?);
        } else {
            println!("{line}");
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
