//! Submit text to a running summarization endpoint and print the result.

use clap::Parser;
use std::io::Read;
use summarize_relay::client::{SummaryClient, SummaryForm};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "summarize-client")]
#[command(about = "Summarize text with a summarize-relay server", long_about = None)]
struct Cli {
    /// Server root; requests go to `<endpoint>/summarize`
    #[arg(long, env = "SUMMARIZE_ENDPOINT", default_value = "http://localhost:5000")]
    endpoint: String,

    /// Text to summarize. Read from stdin when omitted.
    text: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let client = SummaryClient::new(&cli.endpoint)?;
    let mut form = SummaryForm::new();
    form.set_input(text);

    if let Err(rejected) = form.run(&client).await {
        anyhow::bail!("{rejected}");
    }

    if let Some(summary) = form.summary() {
        println!("{summary}");
    }
    Ok(())
}
