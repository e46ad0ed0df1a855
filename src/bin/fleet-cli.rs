use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "fleet-cli")]
#[command(about = "Query a running fleet analytics server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000", env = "FLEET_API_URL")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health and the RPC endpoint in use
    Health,
    /// Balance and classified objects for a wallet
    Assets { wallet: String },
    /// Category breakdown and top asset types for a wallet
    Fleet { wallet: String },
    /// Recent transactions sent by a wallet
    Transactions {
        wallet: String,
        /// Number of transactions (the server caps this at 50)
        #[arg(short, long, default_value_t = 20)]
        limit: u64,
    },
    /// EVE Frontier world data (types, killmails, smart-assemblies, ...)
    World {
        #[arg(default_value = "types")]
        endpoint: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match &cli.command {
        Commands::Health => client.get(format!("{}/health", base)),
        Commands::Assets { wallet } => client.get(format!("{}/assets/{}", base, wallet)),
        Commands::Fleet { wallet } => client.get(format!("{}/fleet/{}", base, wallet)),
        Commands::Transactions { wallet, limit } => client
            .get(format!("{}/transactions/{}", base, wallet))
            .query(&[("limit", limit)]),
        Commands::World { endpoint } => client
            .get(format!("{}/eve-world", base))
            .query(&[("endpoint", endpoint)]),
    };

    let res = request.send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
