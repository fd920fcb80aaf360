use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::IpAddr;

use geosteer::config::Config;
use geosteer::engine;
use geosteer::geoip::{GeoIpResolver, LocationResolver};
use geosteer::storage::{JsonFileStore, RuleStore};

#[derive(Parser)]
#[command(name = "geosteer")]
#[command(about = "Geo rule evaluation and redirection CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the redirect destination for a request URL and visitor IP
    Resolve {
        /// Full request URL (scheme, host, path, query, fragment)
        url: String,
        /// Visitor IP address
        ip: IpAddr,
    },
    /// Check whether a URL could redirect for any visitor (no geo lookup)
    Check {
        /// Full request URL
        url: String,
    },
    /// Evaluate a stored condition set's visibility for a visitor IP
    Visibility {
        /// Condition set id from the rule document
        set_id: String,
        /// Visitor IP address
        ip: IpAddr,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let store = JsonFileStore::open(&config.rules.path)?;
    let resolver = GeoIpResolver::new(config.geoip.city_db_path.as_deref())?;

    match cli.command {
        Commands::Resolve { url, ip } => {
            let rules = store.load_redirection_rules()?;

            if !engine::has_potential_redirect(&rules, &url) {
                println!("no redirect (no rule targets this URL)");
                return Ok(());
            }

            let Some(location) = resolver.resolve(ip) else {
                println!("no redirect (location could not be resolved)");
                return Ok(());
            };

            match engine::resolve_redirect(&rules, &location, &url) {
                Some(destination) => println!("redirect -> {destination}"),
                None => println!("no redirect"),
            }
        }
        Commands::Check { url } => {
            let rules = store.load_redirection_rules()?;
            if engine::has_potential_redirect(&rules, &url) {
                println!("potential redirect: yes");
            } else {
                println!("potential redirect: no");
            }
        }
        Commands::Visibility { set_id, ip } => {
            let set = store.load_condition_set(&set_id)?;

            let Some(location) = resolver.resolve(ip) else {
                println!("hidden (location could not be resolved)");
                return Ok(());
            };

            let visible =
                engine::evaluate_condition_set(&set.conditions, set.operator, set.action, &location);
            println!("{}", if visible { "visible" } else { "hidden" });
        }
    }

    Ok(())
}
