mod resolve_host;

pub use resolve_host::ResolveHostUseCase;
