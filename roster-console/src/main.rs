//! Roster console front-end
//!
//! Thin presentation shell over the HTTP client: every command fetches one
//! envelope and hands it to the console reporter. Failures arrive as
//! envelopes too, so the exit code is the only thing decided here.

use clap::{Parser, Subcommand};

use roster_client::{ClientConfig, HttpClient};
use shared::ConsoleReporter;
use shared::response::Response;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Console front-end for the Roster server",
    after_help = "Examples:\n  roster people list\n  roster people add \"Naeem Afzal\"\n  roster people get 1\n  roster customers list\n"
)]
struct Cli {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:3000", global = true)]
    server: String,

    /// Suppress per-operation success messages
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// People operations
    People {
        #[command(subcommand)]
        action: PeopleAction,
    },
    /// Customer operations
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
}

#[derive(Debug, Subcommand)]
enum PeopleAction {
    /// List all people
    List,
    /// Show one person
    Get { id: i64 },
    /// Add a person
    Add {
        /// Full name of the person
        name: Option<String>,
    },
    /// Update a person
    Update {
        id: i64,
        /// New full name
        name: Option<String>,
    },
    /// Remove a person
    Remove { id: i64 },
}

#[derive(Debug, Subcommand)]
enum CustomerAction {
    /// List all customers
    List,
    /// Show one customer
    Get { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let client = ClientConfig::new(&cli.server).build_http_client();
    let mut reporter = ConsoleReporter::stdout().with_quiet(cli.quiet);

    let success = match cli.command {
        Commands::People { action } => match action {
            PeopleAction::List => {
                let envelope = client.list_people().await;
                print_listing(&envelope, |p| format!("{:>4}  {}", p.id, p.full_name));
                report(&mut reporter, "List people", &envelope)?
            }
            PeopleAction::Get { id } => {
                let envelope = client.get_person(id).await;
                if let Some(person) = &envelope.data {
                    println!("{:>4}  {}", person.id, person.full_name);
                }
                report(&mut reporter, "Get person", &envelope)?
            }
            PeopleAction::Add { name } => {
                let envelope = client.add_person(name).await;
                report(&mut reporter, "Add person", &envelope)?
            }
            PeopleAction::Update { id, name } => {
                let envelope = client.update_person(id, name).await;
                report(&mut reporter, "Update person", &envelope)?
            }
            PeopleAction::Remove { id } => {
                let envelope = client.remove_person(id).await;
                report(&mut reporter, "Remove person", &envelope)?
            }
        },
        Commands::Customers { action } => match action {
            CustomerAction::List => {
                let envelope = client.list_customers().await;
                print_listing(&envelope, |c| {
                    format!("{:>4}  {}  {}", c.id, c.name, c.email.as_deref().unwrap_or("-"))
                });
                report(&mut reporter, "List customers", &envelope)?
            }
            CustomerAction::Get { id } => {
                let envelope = client.get_customer(id).await;
                if let Some(customer) = &envelope.data {
                    println!("{:>4}  {}", customer.id, customer.name);
                }
                report(&mut reporter, "Get customer", &envelope)?
            }
        },
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}

fn print_listing<T>(envelope: &Response<Vec<T>>, line: impl Fn(&T) -> String) {
    if let Some(items) = &envelope.data {
        for item in items {
            println!("{}", line(item));
        }
    }
}

fn report<T>(
    reporter: &mut ConsoleReporter<std::io::Stdout>,
    title: &str,
    envelope: &Response<T>,
) -> anyhow::Result<bool> {
    reporter.report(title, envelope)?;
    Ok(envelope.is_success())
}
