//! Adapters connecting the outside world to the ports.

pub mod inbound;
