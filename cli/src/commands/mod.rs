//! CLI commands for the phonotok tool.

pub mod build;
pub mod decode;
pub mod encode;
pub mod stats;

pub use build::BuildCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use stats::StatsCommand;
