mod client;
mod config;
mod engines;
mod error;
mod facade;

pub use client::{ClientCLI, Commands};
pub use config::{StoreConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use engines::{KvsEngine, MemoryKvsEngine, RedisKvsEngine};
pub use error::{KvsError, KvsResult, Result};
pub use facade::{KvFacade, Lookup, Value, PROBE_KEY_PREFIX};

#[macro_use]
extern crate log;
