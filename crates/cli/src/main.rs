use clap::{Parser, Subcommand};
use passo_client::{PatientDirectory, RegistryClient};
use passo_core::{ClientConfig, DetailView};
use passo_types::PatientName;

#[derive(Parser)]
#[command(name = "passo")]
#[command(about = "Passo patient registry CLI")]
struct Cli {
    /// Registry API base URL (overrides PASSO_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all registered patients
    List,
    /// Register a new patient
    Register {
        /// Patient display name
        name: String,
    },
    /// Show a single patient record
    Show {
        /// Patient identifier
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::from_env_value(
        cli.api_url.or_else(|| std::env::var("PASSO_API_URL").ok()),
    )?;
    let client = RegistryClient::new(config.api_base_url())?;

    match cli.command {
        Some(Commands::List) => {
            let patients = client.list_patients().await?;
            if patients.is_empty() {
                println!("No patients registered.");
            } else {
                for patient in patients {
                    println!("ID: #{}, Name: {}", patient.id, patient.name);
                }
            }
        }
        Some(Commands::Register { name }) => {
            let name = PatientName::new(&name)?;
            client.create_patient(&name).await?;
            println!("Registered patient: {}", name);
        }
        Some(Commands::Show { id }) => {
            let view = DetailView::resolve(&client, id, None).await;
            match view.patient() {
                Some(patient) => println!("ID: #{}, Name: {}", patient.id, patient.name),
                None => println!("No record found for patient #{id}"),
            }
        }
        None => {
            println!("Use 'passo --help' for commands");
        }
    }

    Ok(())
}
