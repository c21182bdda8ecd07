mod environment_reader;

pub use environment_reader::EnvironmentReader;
