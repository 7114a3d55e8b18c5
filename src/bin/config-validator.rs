//! # Repository Config Validator
//!
//! A command-line utility for validating OAI-PMH repository configuration
//! files before deploying them.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin config-validator repository.json
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! Validating repository config: repository.json
//! ✓ Configuration is valid!
//!
//! Repository Summary:
//!   Name: oai test project
//!   Endpoint: http://test.localhost/oai/
//!   Earliest datestamp: 1990-02-01T12:00:00Z
//!   Granularity: YYYY-MM-DDThh:mm:ssZ
//!   Deleted records: no
//!   Identifier format: oai:test.localhost:<local-path>
//!   Sample identifier: oai:lcoa1.loc.gov:loc.music/musdi.002
//!   Administrators: 1
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: The configuration is valid
//! - `1`: The configuration is invalid or could not be read

use oai_pmh_server::config::RepositoryConfig;
use oai_pmh_server::identifier::IdentifierCodec;
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config-file>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} repository.json", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.is_file() {
        eprintln!("Error: '{}' is not a file", path.display());
        process::exit(1);
    }

    println!("Validating repository config: {}", path.display());

    match RepositoryConfig::from_json_file(path) {
        Ok(config) => {
            println!("✓ Configuration is valid!");
            print_config_summary(&config);
        }
        Err(e) => {
            eprintln!("❌ Configuration is invalid: {}", e);
            process::exit(1);
        }
    }
}

fn print_config_summary(config: &RepositoryConfig) {
    let codec = IdentifierCodec::from_config(config);

    println!("\nRepository Summary:");
    println!("  Name: {}", config.repository_name);
    println!("  Endpoint: {}", config.endpoint_url());
    println!(
        "  Earliest datestamp: {}",
        config.granularity.format(&config.earliest_datestamp)
    );
    println!("  Granularity: {}", config.granularity);
    println!("  Deleted records: {}", config.deleted_record.as_str());
    println!(
        "  Identifier format: {}",
        codec.encode("<local-path>")
    );
    println!("  Sample identifier: {}", config.sample_identifier);
    println!("  Administrators: {}", config.admins.len());

    if config.admins.is_empty() {
        println!("  ⚠ No administrators configured; Identify will list no adminEmail");
    }
    if codec.decode(&config.sample_identifier).is_err() {
        println!("  ⚠ Sample identifier does not follow this repository's identifier format");
    }
}
