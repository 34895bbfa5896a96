use crate::config::{DEFAULT_HOST, DEFAULT_PORT};
use crate::engines::KvsEngine;
use crate::{KvFacade, KvsResult, Result, StoreConfig};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

/*
  _____ _      _____ ______ _   _ _______
 / ____| |    |_   _|  ____| \ | |__   __|
| |    | |      | | | |__  |  \| |  | |
| |    | |      | | |  __| | . ` |  | |
| |____| |____ _| |_| |____| |\  |  | |
 \_____|______|_____|______|_| \_|  |_|
 */

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ClientCLI {
    #[clap(flatten)]
    store: StoreArgs,
    #[clap(subcommand)]
    command: Commands,
}

/// Connection target, read from flags or the environment once at start-up.
#[derive(Args, Debug)]
struct StoreArgs {
    /// Redis host name or address.
    #[clap(
        long,
        global = true,
        env = "REDIS_HOST",
        default_value = DEFAULT_HOST,
        value_parser,
        value_name = "HOST",
    )]
    host: String,
    #[clap(
        long,
        global = true,
        env = "REDIS_PORT",
        default_value_t = DEFAULT_PORT,
        value_parser,
        value_name = "PORT",
    )]
    port: u16,
    /// Upper bound for connecting, reading and writing, in milliseconds.
    #[clap(
        long = "timeout-ms",
        global = true,
        env = "REDIS_TIMEOUT_MS",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..),
        value_name = "MILLIS",
    )]
    timeout_ms: u64,
}

impl StoreArgs {
    fn config(&self) -> StoreConfig {
        StoreConfig::new(self.host.clone())
            .with_port(self.port)
            .with_timeout(Duration::from_millis(self.timeout_ms))
    }
}

impl ClientCLI {
    pub fn config(&self) -> StoreConfig {
        self.store.config()
    }

    pub fn run(self) -> Result<ExitCode> {
        let config = self.config();
        info!("store target: {}", config.addr());

        let stdin = io::stdin();
        let stdout = io::stdout();
        self.command.run(
            || KvFacade::connect(&config),
            &mut stdin.lock(),
            &mut stdout.lock(),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a value under a key. Prompts for whatever is not given.
    StoreData {
        #[clap(long, value_parser)]
        key: Option<String>,
        #[clap(long, value_parser)]
        value: Option<String>,
    },
    /// Look a key up. Prompts for the key when it is not given.
    GetData {
        #[clap(value_parser)]
        key: Option<String>,
    },
    /// Write, read and delete a probe key. Exits 1 if any step fails.
    CheckRedis,
    HelloWorld,
}

impl Commands {
    /// Runs the command. `connect` is only called by commands that talk to the store.
    pub fn run<E, C, R, W>(self, connect: C, input: &mut R, out: &mut W) -> Result<ExitCode>
    where
        E: KvsEngine,
        C: FnOnce() -> KvsResult<KvFacade<E>>,
        R: BufRead,
        W: Write,
    {
        match self {
            Commands::StoreData { key, value } => {
                let key = match key {
                    Some(key) => key,
                    None => prompt(input, out, "What should we call this data?")?,
                };
                let value = match value {
                    Some(value) => value,
                    None => prompt(input, out, "What is the data?")?,
                };
                connect()?.put(&key, &value)?;
                writeln!(out, "The data has been stored in redis")?;
            }
            Commands::GetData { key } => {
                let key = match key {
                    Some(key) => key,
                    None => prompt(input, out, "What was name of the data?")?,
                };
                let lookup = connect()?.get(Some(&key))?;
                if lookup.is_found() {
                    writeln!(out, "The data is in redis!")?;
                }
                writeln!(out, "{}", lookup)?;
            }
            Commands::CheckRedis => {
                let healthy = connect()?.health_check();
                writeln!(out, "{}", if healthy { "True" } else { "False" })?;
                if !healthy {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Commands::HelloWorld => writeln!(out, "Oh hai")?,
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Asks `question` on `out` and returns the answer without its line ending.
/// End of input reads as an empty answer.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    writeln!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
