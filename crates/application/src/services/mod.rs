mod env_key_resolver;
mod host_record_builder;
mod service_record_builder;

pub use env_key_resolver::EnvironmentKeyResolver;
pub use host_record_builder::HostRecordBuilder;
pub use service_record_builder::ServiceRecordBuilder;
