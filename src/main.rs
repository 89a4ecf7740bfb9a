use anyhow::{Context, Result};
use argon2phc::{ENCODE_ALGORITHM, HashConfig, HashRecord, Hasher, KdfParams};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
mod auth;

#[derive(Debug, clap::Args)]
struct Argon2Args {
    /// Argon2 memory cost in KiB
    #[arg(long = "mem", env = "ARGON2PHC_MEM", default_value_t = KdfParams::default().mem_cost_kib())]
    mem_cost_kib: u32,

    /// Argon2 time cost / iterations
    #[arg(long = "time", env = "ARGON2PHC_TIME", default_value_t = KdfParams::default().time_cost())]
    time_cost: u32,

    /// Argon2 parallelism (lanes)
    #[arg(long = "parallelism", env = "ARGON2PHC_PARALLELISM", default_value_t = KdfParams::default().parallelism())]
    parallelism: u8,

    /// Salt length in bytes
    #[arg(long = "salt-len", env = "ARGON2PHC_SALT_LEN", default_value_t = HashConfig::default().salt_len)]
    salt_len: usize,

    /// Derived key length in bytes
    #[arg(long = "key-len", env = "ARGON2PHC_KEY_LEN", default_value_t = HashConfig::default().key_len)]
    key_len: usize,
}

impl Argon2Args {
    fn to_config(&self) -> HashConfig {
        HashConfig {
            params: KdfParams::new(self.mem_cost_kib, self.time_cost, self.parallelism),
            salt_len: self.salt_len,
            key_len: self.key_len,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "argon2phc")]
#[command(version, about = "Hash and verify passwords as Argon2id PHC strings.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password and prints the PHC string
    Hash {
        /// Algorithm name
        #[arg(long, default_value = ENCODE_ALGORITHM)]
        algorithm: String,

        #[command(flatten)]
        argon2: Argon2Args,
    },

    /// Checks a password against a PHC string
    #[command(arg_required_else_help = true)]
    Verify { record: String },

    /// Shows the parameters stored in a PHC string
    #[command(arg_required_else_help = true)]
    Inspect {
        record: String,

        /// Print as JSON
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct RecordSummary<'a> {
    algorithm: &'a str,
    version: u32,
    params: &'a KdfParams,
    salt_len: usize,
    key_len: usize,
}

impl<'a> From<&'a HashRecord> for RecordSummary<'a> {
    fn from(record: &'a HashRecord) -> Self {
        Self {
            algorithm: record.algorithm(),
            version: record.version(),
            params: record.params(),
            salt_len: record.salt().len(),
            key_len: record.key().len(),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Cli::parse();
    let hasher = Hasher::new();

    match args.command {
        Commands::Hash { algorithm, argon2 } => {
            let password = auth::read_password(true)?;
            let text = hasher
                .encode(&password, &algorithm, &argon2.to_config())
                .context("failed to hash password")?;
            println!("{text}");
        }
        Commands::Verify { record } => {
            let password = auth::read_password(false)?;
            if hasher.verify(&password, &record)? {
                println!("match");
            } else {
                println!("no match");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Inspect { record, json } => {
            let record = hasher.decode(&record)?;
            let summary = RecordSummary::from(&record);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let params = summary.params;
                println!("algorithm    {}", summary.algorithm);
                println!("version      {}", summary.version);
                println!("memory (KiB) {}", params.mem_cost_kib());
                println!("iterations   {}", params.time_cost());
                println!("parallelism  {}", params.parallelism());
                println!("salt length  {}", summary.salt_len);
                println!("key length   {}", summary.key_len);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
