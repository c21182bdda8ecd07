//! NSS module resolving Kubernetes service names from the
//! `<NAME>_SERVICE_HOST` / `<NAME>_SERVICE_PORT` variables kubelet injects
//! into every container.
//!
//! Install the library as `libnss_kubernetes.so.2` and add `kubernetes` to
//! the `hosts:` and `services:` lines of `/etc/nsswitch.conf`.
pub mod bootstrap;
pub mod dispatcher;
pub mod ffi;

pub use dispatcher::Dispatcher;
