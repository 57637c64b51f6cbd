//! Application services
//!
//! Local persistence standing in for the host platform's parameter storage.

mod parameter_store;

pub use parameter_store::FileParameterStore;
