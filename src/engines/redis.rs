use std::time::Duration;

use redis::{Client, Commands, Connection, RedisError};

use super::KvsEngine;
use crate::{KvsError, KvsResult, StoreConfig};

/// Implements KvsEngine for a remote Redis server.
///
/// Holds only the connection target. Every primitive opens its own
/// connection, bounded by the configured timeout, and drops it afterwards.
pub struct RedisKvsEngine {
    client: Client,
    addr: String,
    timeout: Duration,
}

impl RedisKvsEngine {
    /// Validates the target; does not touch the network.
    pub fn new(config: &StoreConfig) -> KvsResult<Self> {
        if config.host.trim().is_empty() {
            return Err(KvsError::InvalidInput("store host must not be empty".into()));
        }
        let client = Client::open(config.url()).map_err(|e| {
            KvsError::InvalidInput(format!("bad store address {}: {}", config.addr(), e))
        })?;

        Ok(Self {
            client,
            addr: config.addr(),
            timeout: config.timeout,
        })
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    fn connect(&self) -> KvsResult<Connection> {
        debug!("connecting to {} (timeout {:?})", self.addr, self.timeout);
        let con = self
            .client
            .get_connection_with_timeout(self.timeout)
            .map_err(|e| self.unavailable(e))?;
        con.set_read_timeout(Some(self.timeout))
            .map_err(|e| self.unavailable(e))?;
        con.set_write_timeout(Some(self.timeout))
            .map_err(|e| self.unavailable(e))?;
        Ok(con)
    }

    fn unavailable(&self, e: RedisError) -> KvsError {
        KvsError::StoreUnavailable {
            addr: self.addr.clone(),
            source: Box::new(e),
        }
    }

    /// Transport trouble means the store is unavailable; anything else is a reply.
    fn classify(&self, e: RedisError) -> KvsError {
        if e.is_io_error()
            || e.is_timeout()
            || e.is_connection_refusal()
            || e.is_connection_dropped()
        {
            self.unavailable(e)
        } else {
            KvsError::Rejected {
                source: Box::new(e),
            }
        }
    }
}

impl KvsEngine for RedisKvsEngine {
    fn set(&mut self, key: String, value: String) -> KvsResult<()> {
        let mut con = self.connect()?;
        con.set::<_, _, ()>(&key, value)
            .map_err(|e| self.classify(e))?;
        Ok(())
    }

    fn get(&mut self, key: String) -> KvsResult<Option<String>> {
        let mut con = self.connect()?;
        let raw: Option<Vec<u8>> = con.get(&key).map_err(|e| self.classify(e))?;
        match raw {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|source| KvsError::Decode { key, source }),
            None => Ok(None),
        }
    }

    fn remove(&mut self, key: String) -> KvsResult<()> {
        let mut con = self.connect()?;
        con.del::<_, ()>(&key).map_err(|e| self.classify(e))?;
        Ok(())
    }
}
