pub mod process_environment;

pub use process_environment::ProcessEnvironment;
