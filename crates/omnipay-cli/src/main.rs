//! # omnipay
//!
//! Command-line front end for gateway naming and the strict helpers.
//!
//! ## Usage
//!
//! ```bash
//! omnipay class-name PayPal_Express
//! omnipay short-name '\League\Omnipay\PayPal\ExpressGateway'
//! omnipay luhn 4111111111111111
//! omnipay to-float 000009.99900000000
//!
//! # to-float reads its argument as a JSON literal first, so 1e5 is the
//! # JSON number 100000 while the quoted string '"1e5"' is rejected
//! omnipay to-float 1e5
//!
//! # List configured gateways (config/gateways.toml or OMNIPAY_GATEWAYS)
//! omnipay gateways
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(
    name = "omnipay",
    about = "Gateway naming and validation helpers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a gateway identifier to its class name
    ClassName {
        identifier: String,

        /// Vendor namespace of the naming convention
        #[arg(long, env = "OMNIPAY_VENDOR", default_value = omnipay_core::naming::DEFAULT_VENDOR)]
        vendor: String,
    },

    /// Derive the short identifier of a gateway class name
    ShortName {
        class_name: String,

        /// Vendor namespace of the naming convention
        #[arg(long, env = "OMNIPAY_VENDOR", default_value = omnipay_core::naming::DEFAULT_VENDOR)]
        vendor: String,
    },

    /// Convert a snake_case key to camelCase
    CamelCase { input: String },

    /// Check a card number against the Luhn checksum
    Luhn { number: Option<String> },

    /// Parse a decimal amount. JSON literals (numbers, booleans, quoted
    /// strings) are read as JSON; anything else is a plain string.
    ToFloat { value: String },

    /// List configured gateways with their resolved class names
    Gateways {
        /// Gateway config file (defaults to config/gateways.toml, then the environment)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    match cli.command {
        Commands::ClassName { identifier, vendor } => {
            println!("{}", commands::class_name(&identifier, &vendor));
        }
        Commands::ShortName { class_name, vendor } => {
            println!("{}", commands::short_name(&class_name, &vendor));
        }
        Commands::CamelCase { input } => {
            println!("{}", omnipay_core::camel_case(&input));
        }
        Commands::Luhn { number } => {
            let valid = omnipay_core::validate_luhn(number.as_deref());
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::ToFloat { value } => {
            println!("{}", commands::to_float(&value)?);
        }
        Commands::Gateways { config } => {
            for line in commands::gateways(config.as_deref())? {
                println!("{line}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
