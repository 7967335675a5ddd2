pub mod security;
pub mod sinks;
