#![allow(dead_code)]

use nss_kubernetes_application::ports::EnvironmentReader;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockEnvironment {
    vars: Arc<RwLock<HashMap<String, String>>>,
    reads: Arc<RwLock<Vec<String>>>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        let env = Self::new();
        for (key, value) in vars {
            env.set(key, value);
        }
        env
    }

    pub fn set(&self, key: &str, value: &str) {
        self.vars
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Keys looked up so far, in order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.read().unwrap().clone()
    }
}

impl EnvironmentReader for MockEnvironment {
    fn read(&self, key: &str) -> Option<String> {
        self.reads.write().unwrap().push(key.to_string());
        self.vars.read().unwrap().get(key).cloned()
    }
}
