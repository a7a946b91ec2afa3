// Library exports for the binaries and integration tests
pub mod config;
pub mod constants;
pub mod heart;
pub mod mask;
pub mod resize;
