use anyhow::{bail, Result};
use localize_sync::{Config, Localize};
use tracing::info;

/// Language filters shared by `sync` and `clear`
#[derive(Debug, Default, PartialEq)]
struct Filters {
    only: Vec<String>,
    except: Vec<String>,
}

impl Filters {
    fn parse(args: &[String]) -> Result<Self> {
        let mut filters = Filters::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_string())),
                None => (arg.as_str(), None),
            };

            let target = match flag {
                "--only" => &mut filters.only,
                "--except" => &mut filters.except,
                _ => bail!("Unknown option: {}", arg),
            };

            let value = match inline {
                Some(value) => value,
                None => match iter.next() {
                    Some(value) => value.clone(),
                    None => bail!("{} requires a comma-separated list of languages", flag),
                },
            };

            target.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            );
        }

        Ok(filters)
    }

    fn apply(&self, localize: &mut Localize) {
        if !self.only.is_empty() {
            localize.only(&self.only);
        }
        if !self.except.is_empty() {
            localize.except(&self.except);
        }
    }
}

fn print_usage() {
    println!("Usage: localize <command> [options]");
    println!();
    println!("Commands:");
    println!("  sync        Export translation files for the selected languages");
    println!("  clear       Remove language directories that are not selected");
    println!("  languages   List the project's languages");
    println!();
    println!("Options (sync, clear):");
    println!("  --only <en,fr>     Select only these languages");
    println!("  --except <de>      Select every language but these");
    println!();
    println!("Configuration is read from LOCALIZE_* environment variables (or .env).");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localize_sync=info".parse()?)
                .add_directive("localize=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = args[1].as_str();
    if matches!(command, "--help" | "-h" | "help") {
        print_usage();
        return Ok(());
    }
    if !matches!(command, "sync" | "clear" | "languages") {
        eprintln!("Unknown command: {}", command);
        print_usage();
        std::process::exit(1);
    }

    let filters = Filters::parse(&args[2..])?;
    let config = Config::from_env()?;
    let mut localize = Localize::new(config).await?;
    filters.apply(&mut localize);

    match command {
        "sync" => {
            let report = localize.export()?;
            info!("Synced {} language file(s)", report.files.len());
        }
        "clear" => {
            let report = localize.clear()?;
            info!(
                "Cleared {} language director(ies), kept {}",
                report.removed.len(),
                report.kept.len()
            );
        }
        _ => {
            for language in localize.languages() {
                println!("{}", language);
            }
        }
    }

    Ok(())
}
