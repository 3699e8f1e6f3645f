use bandarmology::{
    models::StockInput,
    orchestrator::AnalysisOrchestrator,
    report,
    services::AnalysisClient,
    utils::{default_analysis_date, init_logger, parse_input_date},
};
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "bandarmology")]
#[command(about = "A CLI for Indonesian stock bandarmology analysis with clipboard-ready reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze broker accumulation for a ticker over a date range
    Analyze {
        /// Ticker symbol (emiten) to analyze
        #[arg(short, long)]
        emiten: String,
        /// Start of the range (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from_date: Option<String>,
        /// End of the range (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to_date: Option<String>,
        /// Copy the report to the system clipboard
        #[arg(short, long, default_value_t = false)]
        copy: bool,
        /// Analysis API base URL (defaults to $BANDARMOLOGY_API_URL)
        #[arg(long)]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            emiten,
            from_date,
            to_date,
            copy,
            api_url,
        } => {
            // The input form enforces a non-empty ticker upstream; here the
            // CLI plays that role.
            let emiten = emiten.trim().to_uppercase();
            if emiten.is_empty() {
                anyhow::bail!("Emiten must not be empty");
            }

            let default_date = default_analysis_date();
            let from_date = from_date.unwrap_or_else(|| default_date.clone());
            let to_date = to_date.unwrap_or_else(|| default_date.clone());
            for date in [&from_date, &to_date] {
                if parse_input_date(date).is_err() {
                    anyhow::bail!("Invalid date '{}', expected YYYY-MM-DD", date);
                }
            }

            let client = match api_url {
                Some(url) => AnalysisClient::new(url),
                None => AnalysisClient::from_env(),
            };
            let mut orchestrator = AnalysisOrchestrator::new(Arc::new(client));

            orchestrator
                .submit(StockInput::new(&emiten, &from_date, &to_date))
                .await;

            if let Some(message) = orchestrator.state().error_message() {
                anyhow::bail!("Analisis gagal: {}", message);
            }

            // Clipboard failure is logged only; the report still prints.
            let copied = copy && orchestrator.copy_report();

            if let Some(result) = orchestrator.state().result() {
                println!("{}", report::serialize(result));
            }

            if copied && orchestrator.copy_feedback().is_active() {
                println!();
                println!("Laporan tersalin ke clipboard");
            }
        }
    }

    Ok(())
}
