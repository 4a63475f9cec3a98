use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use logis_server::{initialize, router, serve, terminal::run_terminal, Cli, Mode};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = concat!(
    "logis=info,logis_server=info,logis_housing=info,",
    "logis_retrieval=info,logis_rag=info,tower_http=info"
);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let ctx = initialize(&cli.config).await?;
    tracing::info!(documents = ctx.documents_loaded(), model = ctx.model(), "pipeline ready");

    match cli.mode.unwrap_or_default() {
        Mode::Serve => {
            let app = router(Arc::new(ctx), &cli.config)?;
            serve(app, cli.config.address).await?;
        }
        Mode::Terminal => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            run_terminal(ctx.chain(), stdin, &mut stdout).await?;
        }
    }
    Ok(())
}
