//! Process lifecycle for the interactive host

mod shutdown;

pub use shutdown::ShutdownSignal;
