mod memory;
mod redis;

use crate::KvsResult;

pub use self::memory::MemoryKvsEngine;
pub use self::redis::RedisKvsEngine;

/// The three store primitives the facade is built on.
pub trait KvsEngine {
    /// Writes `value` under `key`, replacing whatever was there.
    fn set(&mut self, key: String, value: String) -> KvsResult<()>;

    /// Returns `None` when nothing is stored under `key`.
    fn get(&mut self, key: String) -> KvsResult<Option<String>>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&mut self, key: String) -> KvsResult<()>;
}

impl<E: KvsEngine + ?Sized> KvsEngine for &mut E {
    fn set(&mut self, key: String, value: String) -> KvsResult<()> {
        (**self).set(key, value)
    }

    fn get(&mut self, key: String) -> KvsResult<Option<String>> {
        (**self).get(key)
    }

    fn remove(&mut self, key: String) -> KvsResult<()> {
        (**self).remove(key)
    }
}
