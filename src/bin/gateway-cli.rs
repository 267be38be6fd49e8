use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use erp_gateway::access::{can_access_route, Department, User};

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Management CLI for the ERP gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway liveness
    Status,
    /// Evaluate route access for a hypothetical user
    Access {
        /// Route path to check (e.g. /dashboard/erp/orders/123)
        path: String,

        /// Comma-separated department identifiers
        #[arg(short, long, default_value = "")]
        departments: String,

        /// Treat the user as a superuser
        #[arg(short, long)]
        superuser: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status => {
            let client = reqwest::Client::new();
            let res = client.get(format!("{}/healthz", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Access {
            path,
            departments,
            superuser,
        } => {
            let department_access = departments
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse::<Department>)
                .collect::<Result<_, _>>()?;
            let user = User {
                is_superuser: superuser,
                department_access,
            };

            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "path": path,
                    "user": user,
                    "allowed": can_access_route(Some(&user), &path),
                }))?
            );
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
