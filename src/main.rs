use chrono::{Local, NaiveDate};
use clap::Parser;
use sleepdiary::application::{
    delete_with_confirmation, record, AssumeYes, ConfigService, DeleteOutcome, EntryForm,
    ExportService, InitService,
};
use sleepdiary::cli::output::SAVED_MESSAGE;
use sleepdiary::cli::{format_entry, format_history, Cli, Commands, LineConfirm};
use sleepdiary::domain::DateReference;
use sleepdiary::error::Result;
use sleepdiary::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SLEEPDIARY_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_date(input: &str) -> Result<NaiveDate> {
    Ok(DateReference::parse(input)?.resolve(Local::now().date_naive()))
}

fn save_form<F: EntryForm>(date: &str, form: F) -> Result<()> {
    let date = resolve_date(date)?;
    let repo = FileSystemRepository::discover()?;
    let mut store = repo.open_store();
    record(&mut store, date, &form)?;
    println!("{} ({})", SAVED_MESSAGE, date.format("%Y-%m-%d"));
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            InitService::execute(&path)?;
            println!("Initialized sleep diary at {}", path.display());
            Ok(())
        }
        Commands::Morning { date, fields } => save_form(&date, fields.into_form()),
        Commands::Evening { date, fields } => save_form(&date, fields.into_form()),
        Commands::Show { date } => {
            let date = resolve_date(&date)?;
            let store = FileSystemRepository::discover()?.open_store();
            let entry = store.entry_for_date(date);
            print!("{}", format_entry(&entry, store.contains(date)));
            Ok(())
        }
        Commands::History => {
            let store = FileSystemRepository::discover()?.open_store();
            let output = format_history(store.list_entries().rev().map(|(_, entry)| entry));
            if store.is_empty() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
        Commands::Delete { date, yes } => {
            let date = resolve_date(&date)?;
            let mut store = FileSystemRepository::discover()?.open_store();

            let outcome = if yes {
                delete_with_confirmation(&mut store, date, &mut AssumeYes)?
            } else {
                let stdin = std::io::stdin();
                let mut confirm = LineConfirm::new(stdin.lock(), std::io::stdout());
                delete_with_confirmation(&mut store, date, &mut confirm)?
            };

            match outcome {
                DeleteOutcome::Deleted => println!("Deleted entry for {}", date),
                DeleteOutcome::NotFound => println!("No entry for {}", date),
                DeleteOutcome::Cancelled => println!("Cancelled"),
            }
            Ok(())
        }
        Commands::Export { output } => {
            let repo = FileSystemRepository::discover()?;
            let path = ExportService::new(repo).execute(&output, Local::now().date_naive())?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("export_prefix = {}", config.export_prefix);
                println!(
                    "csv_quoting = {}",
                    format!("{:?}", config.csv_quoting).to_lowercase()
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: sleepdiary config [--list | <key> [<value>]]");
                println!("Valid keys: export_prefix, csv_quoting, created");
                Ok(())
            }
        }
    }
}
