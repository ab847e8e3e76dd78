pub mod config;
pub mod inbound;
pub mod outbound;

pub use outbound::registry;
