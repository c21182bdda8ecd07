use nss_kubernetes_domain::fallible::try_owned;
use nss_kubernetes_domain::{DomainError, ResolvedPort, ServiceRecord};

pub struct ServiceRecordBuilder;

impl ServiceRecordBuilder {
    pub fn build(name: &str, port: ResolvedPort) -> Result<ServiceRecord, DomainError> {
        Ok(ServiceRecord {
            name: try_owned(name)?,
            aliases: Vec::new(),
            port: port.port(),
            protocol: port.protocol(),
        })
    }
}
