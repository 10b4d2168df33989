use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;

use vehicle_console::cli::{Cli, Commands};
use vehicle_console::config::{Config, TokenStore};
use vehicle_console::gateway::ApiClient;
use vehicle_console::logging;
use vehicle_console::model::{RecordKind, Records};
use vehicle_console::ui;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config().context("Failed to load configuration")?;
    let tokens = TokenStore::new(config.token_path());

    match cli.command {
        None => ui::run(config, tokens).context("Console exited with an error"),
        Some(Commands::Logout) => {
            tokens.clear()?;
            println!("Logged out");
            Ok(())
        }
        Some(Commands::List { kind }) => list(&config, &tokens, kind),
    }
}

fn list(config: &Config, tokens: &TokenStore, kind: RecordKind) -> Result<()> {
    let Some(token) = tokens.load()? else {
        bail!("Not logged in (no token at {})", tokens.path().display());
    };
    let client = ApiClient::new(&config.api)?.with_token(Some(token));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let records = runtime
        .block_on(client.list_kind(kind))
        .with_context(|| format!("Failed to fetch {}", kind))?;

    let rows: Vec<String> = match records {
        Records::Segments(segments) => segments
            .iter()
            .map(|s| format!("{:>4}  {}", s.id, s.name))
            .collect(),
        Records::Brands(brands) => brands
            .iter()
            .map(|b| format!("{:>4}  {}", b.id, b.name))
            .collect(),
        Records::Vehicles(vehicles) => vehicles
            .iter()
            .map(|v| format!("{:>4}  {}", v.id, ui::render::vehicle_row(v, &config.display)))
            .collect(),
    };
    for row in rows {
        println!("{}", row);
    }
    Ok(())
}
