use std::fmt;

use uuid::Uuid;

use crate::engines::{KvsEngine, RedisKvsEngine};
use crate::{KvsError, KvsResult, StoreConfig};

/// Every health probe key starts with this, so it never lands on application data.
pub const PROBE_KEY_PREFIX: &str = "__redis_kv_health__:";
const PROBE_VALUE: &str = "probe";

/// Outcome of a lookup. Absence is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Found(String),
    NotFound,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Found(value) => write!(f, "{:?}", value),
            Value::NotFound => f.write_str("Not Found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub key: String,
    pub value: Value,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self.value, Value::Found(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::Found(value) => Some(value),
            Value::NotFound => None,
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key={:?}\nval={}", self.key, self.value)
    }
}

/// Put, get and health check on top of a [`KvsEngine`].
///
/// Stateless apart from the engine: each call is one round trip (three for
/// the health check) and nothing is cached between calls.
pub struct KvFacade<E: KvsEngine> {
    engine: E,
}

impl KvFacade<RedisKvsEngine> {
    /// Facade over the Redis server described by `config`.
    pub fn connect(config: &StoreConfig) -> KvsResult<Self> {
        Ok(Self::new(RedisKvsEngine::new(config)?))
    }
}

impl<E: KvsEngine> KvFacade<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_inner(self) -> E {
        self.engine
    }

    /// Stores `value` under `key`. Last write wins.
    pub fn put(&mut self, key: &str, value: &str) -> KvsResult<()> {
        if key.is_empty() || value.is_empty() {
            warn!("storing an empty key or value (key: {:?})", key);
        }
        self.engine.set(key.to_string(), value.to_string())?;
        debug!("stored {:?}", key);
        Ok(())
    }

    /// Looks `key` up. A missing or empty key is rejected before the store is asked.
    pub fn get(&mut self, key: Option<&str>) -> KvsResult<Lookup> {
        let key = match key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(KvsError::InvalidInput("a key is required".into())),
        };

        let value = match self.engine.get(key.to_string())? {
            Some(value) => Value::Found(value),
            None => Value::NotFound,
        };
        Ok(Lookup {
            key: key.to_string(),
            value,
        })
    }

    /// Write, read back and delete a fresh probe key.
    pub fn check(&mut self) -> KvsResult<()> {
        let key = format!("{}{}", PROBE_KEY_PREFIX, Uuid::new_v4());
        self.engine.set(key.clone(), PROBE_VALUE.to_string())?;

        let read_back = self.engine.get(key.clone());
        let read_back = match read_back {
            Ok(Some(value)) if value == PROBE_VALUE => Ok(()),
            Ok(_) => Err(KvsError::ProbeMismatch { key: key.clone() }),
            Err(e) => Err(e),
        };
        if let Err(e) = read_back {
            // the write went through, so try not to leave the probe behind
            if let Err(cleanup) = self.engine.remove(key) {
                debug!("could not remove health probe: {}", cleanup);
            }
            return Err(e);
        }

        self.engine.remove(key)
    }

    /// `true` when the store completed a full write, read and delete.
    pub fn health_check(&mut self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                warn!("health check failed: {}", e);
                false
            }
        }
    }
}
