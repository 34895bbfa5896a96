use std::collections::HashMap;

use super::KvsEngine;
use crate::KvsResult;

/// In-process engine with the same contract as the Redis one.
#[derive(Default, Debug)]
pub struct MemoryKvsEngine {
    data: HashMap<String, String>,
}

impl MemoryKvsEngine {
    pub fn new() -> Self {
        Self {
            data: HashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

impl KvsEngine for MemoryKvsEngine {
    fn set(&mut self, key: String, value: String) -> KvsResult<()> {
        self.data.insert(key, value);
        Ok(())
    }

    fn get(&mut self, key: String) -> KvsResult<Option<String>> {
        Ok(self.data.get(&key).cloned())
    }

    fn remove(&mut self, key: String) -> KvsResult<()> {
        self.data.remove(&key);
        Ok(())
    }
}
