use anyhow::Result;
use clap::{Parser, Subcommand};
use directory_client::{EmployeeDirectory, RestDirectoryClient};
use shared::{domain::EmployeeId, protocol::EmployeeDraft};

#[derive(Parser, Debug)]
#[command(about = "Operator console for the employee directory API")]
struct Args {
    /// Base URL of the employee API.
    #[arg(long, default_value = "http://localhost:8080/api/v1")]
    api_base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all employees in server order.
    List,
    /// Create a new employee.
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email_id: String,
    },
    /// Replace an existing employee's fields.
    Update {
        id: i64,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email_id: String,
    },
    /// Delete an employee by id.
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let client = RestDirectoryClient::new(args.api_base_url);
    match args.command {
        Command::List => {
            let employees = client.list_employees().await?;
            if employees.is_empty() {
                println!("No employees.");
            }
            for employee in employees {
                println!(
                    "{:>6}  {:<28} {}",
                    employee.id.0,
                    employee.full_name(),
                    employee.email_id
                );
            }
        }
        Command::Create {
            first_name,
            last_name,
            email_id,
        } => {
            let created = client
                .create_employee(&EmployeeDraft {
                    first_name,
                    last_name,
                    email_id,
                })
                .await?;
            println!("Created employee {} ({})", created.id.0, created.full_name());
        }
        Command::Update {
            id,
            first_name,
            last_name,
            email_id,
        } => {
            let updated = client
                .update_employee(
                    EmployeeId(id),
                    &EmployeeDraft {
                        first_name,
                        last_name,
                        email_id,
                    },
                )
                .await?;
            println!("Updated employee {} ({})", updated.id.0, updated.full_name());
        }
        Command::Delete { id } => {
            client.delete_employee(EmployeeId(id)).await?;
            println!("Deleted employee {id}");
        }
    }

    Ok(())
}
