mod render;

use std::io::{self, Write};

use aave_client::{ClientError, UserPosition, SUPPORTED_NETWORKS};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Terminal front end for the position viewer. With arguments it runs one
/// query and exits; without arguments it loops on an input form, which also
/// serves as the retry affordance after a failed request.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => run_interactive().await,
        [address] => run_once(address, "arbitrum").await,
        [address, network] => run_once(address, network).await,
        _ => {
            eprintln!("Usage: position_cli [ADDRESS] [NETWORK]");
            std::process::exit(2);
        }
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_file(false)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

async fn run_once(address: &str, network: &str) -> Result<()> {
    match fetch_position(address, network).await {
        Ok(position) => {
            render::render_result(&position);
            Ok(())
        }
        Err(err) => {
            render::render_error(&err.to_string());
            std::process::exit(1);
        }
    }
}

async fn run_interactive() -> Result<()> {
    render::print_banner();

    loop {
        let Some(address) = prompt("Wallet address (or 'quit'): ")? else {
            break;
        };
        if address.eq_ignore_ascii_case("quit") || address.eq_ignore_ascii_case("exit") {
            break;
        }
        if address.is_empty() {
            render::render_error("Please enter a wallet address");
            continue;
        }

        let network_label = format!("Network [{}] (default: arbitrum): ", SUPPORTED_NETWORKS.join(", "));
        let Some(network) = prompt(&network_label)? else {
            break;
        };
        let network = if network.is_empty() {
            "arbitrum".to_string()
        } else {
            network
        };

        // The await serializes submissions: the form cannot be resubmitted
        // while a request is in flight.
        println!("Fetching position...");
        match fetch_position(&address, &network).await {
            Ok(position) => render::render_result(&position),
            Err(err) => render::render_error(&err.to_string()),
        }
        println!();
    }

    Ok(())
}

async fn fetch_position(address: &str, network: &str) -> Result<UserPosition, ClientError> {
    let client = aave_client::connect(network)?;
    client.get_user_position(address).await
}

/// Read one trimmed line; `None` on end of input.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
