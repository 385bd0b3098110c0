use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use url::Url;

#[derive(Parser)]
#[command(name = "employee-cli")]
#[command(about = "Command line client for the employee facade", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every employee
    List,
    /// Show one employee
    Get { id: String },
    /// Employees with exactly this name
    Search { name: String },
    /// Highest salary across all employees
    HighestSalary,
    /// Names of the ten best paid employees
    TopEarners,
    /// Create an employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: i64,
        #[arg(long)]
        age: i64,
    },
    /// Delete an employee
    Delete { id: String },
    /// Check facade status
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url)?;

    let request = match cli.command {
        Commands::List => client.get(endpoint(&base, &["employees"])?),
        Commands::Get { id } => client.get(endpoint(&base, &["employees", &id])?),
        Commands::Search { name } => {
            client.get(endpoint(&base, &["employees", "search", &name])?)
        }
        Commands::HighestSalary => client.get(endpoint(&base, &["employees", "highestSalary"])?),
        Commands::TopEarners => client.get(endpoint(
            &base,
            &["employees", "topTenHighestEarningNames"],
        )?),
        Commands::Create { name, salary, age } => client
            .post(endpoint(&base, &["employees"])?)
            .json(&json!({ "name": name, "salary": salary, "age": age })),
        Commands::Delete { id } => client.delete(endpoint(&base, &["employees", &id])?),
        Commands::Health => client.get(endpoint(&base, &["health"])?),
    };

    print_response(request.send().await?).await
}

/// Append path segments to the facade URL, percent-encoding each one.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("'{}' cannot be used as a base URL", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: facade returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
