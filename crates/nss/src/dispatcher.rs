use libc::{c_char, hostent, servent};
use nss_kubernetes_application::ports::EnvironmentReader;
use nss_kubernetes_application::use_cases::{ResolveHostUseCase, ResolveServiceUseCase};
use nss_kubernetes_domain::{AddressFamily, DomainError, LookupConfig};
use nss_kubernetes_infrastructure::abi::{
    write_addrtuple, write_hostent, write_servent, GaihAddrTuple,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// The six lookups the module answers, each a pure function of its
/// arguments, the caller's buffer and the environment at call time.
pub struct Dispatcher {
    hosts: ResolveHostUseCase,
    services: ResolveServiceUseCase,
    ttl: i32,
}

impl Dispatcher {
    pub fn new(env: Arc<dyn EnvironmentReader>, config: &LookupConfig) -> Self {
        Self {
            hosts: ResolveHostUseCase::new(Arc::clone(&env)),
            services: ResolveServiceUseCase::new(env),
            ttl: config.ttl,
        }
    }

    pub fn ttl(&self) -> i32 {
        self.ttl
    }

    /// `gethostbyname_r`: any family.
    pub fn host_by_name(
        &self,
        name: &str,
        host: &mut hostent,
        buffer: &mut [u8],
    ) -> Result<(), DomainError> {
        self.host_by_name_family(name, AddressFamily::Unspecified, host, buffer)
            .map(|_| ())
    }

    /// `gethostbyname3_r`: caller-chosen family. Returns the canonical name,
    /// which is `h_name` inside `buffer`.
    pub fn host_by_name_family(
        &self,
        name: &str,
        family: AddressFamily,
        host: &mut hostent,
        buffer: &mut [u8],
    ) -> Result<*mut c_char, DomainError> {
        let record = self.hosts.execute(name, family)?;
        write_hostent(&record, host, buffer)?;
        Ok(host.h_name)
    }

    /// `gethostbyname4_r`: a single `gaih_addrtuple`, written over
    /// `previous` when the caller supplies one.
    pub fn host_tuple_by_name(
        &self,
        name: &str,
        buffer: &mut [u8],
        previous: Option<&mut GaihAddrTuple>,
    ) -> Result<*mut GaihAddrTuple, DomainError> {
        let tuple = self.hosts.execute_tuple(name)?;
        write_addrtuple(&tuple, buffer, previous)
    }

    /// `gethostbyaddr_r`: the variables carry no reverse index.
    pub fn host_by_addr(&self, addr: Option<IpAddr>) -> Result<(), DomainError> {
        debug!(addr = ?addr, "Reverse lookup not supported");
        Err(DomainError::ReverseLookupUnsupported)
    }

    /// `getservbyname_r`: tcp only.
    pub fn service_by_name(
        &self,
        name: &str,
        protocol: Option<&str>,
        serv: &mut servent,
        buffer: &mut [u8],
    ) -> Result<(), DomainError> {
        let record = self.services.execute(name, protocol)?;
        write_servent(&record, serv, buffer)
    }

    /// `getservbyport_r`: there is no port-to-name index either.
    pub fn service_by_port(&self, port: u16, protocol: Option<&str>) -> Result<(), DomainError> {
        debug!(port, protocol = ?protocol, "Service lookup by port not supported");
        Err(DomainError::PortLookupUnsupported)
    }
}
