#![allow(dead_code)]

use libc::{hostent, servent};
use nss_kubernetes_application::ports::EnvironmentReader;
use std::collections::HashMap;
use std::ptr;

/// Fixed set of variables standing in for the process environment.
#[derive(Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl EnvironmentReader for StaticEnvironment {
    fn read(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn empty_hostent() -> hostent {
    hostent {
        h_name: ptr::null_mut(),
        h_aliases: ptr::null_mut(),
        h_addrtype: 0,
        h_length: 0,
        h_addr_list: ptr::null_mut(),
    }
}

pub fn empty_servent() -> servent {
    servent {
        s_name: ptr::null_mut(),
        s_aliases: ptr::null_mut(),
        s_port: 0,
        s_proto: ptr::null_mut(),
    }
}
