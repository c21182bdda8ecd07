//! nss-kubernetes Infrastructure Layer
pub mod abi;
pub mod layout;
pub mod system;
