use clap::Parser;
use log::LevelFilter;
use redis_kv::ClientCLI;
use redis_kv::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = ClientCLI::parse();
    cli.run()
}
