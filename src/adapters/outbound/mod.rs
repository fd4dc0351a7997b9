/// Outbound adapters - infrastructure implementations of the outbound ports
pub mod console;
pub mod filesystem;
pub mod metadata;
pub mod network;
pub mod process;
