pub mod hosts;
pub mod services;

// Re-export use cases
pub use hosts::ResolveHostUseCase;
pub use services::ResolveServiceUseCase;
