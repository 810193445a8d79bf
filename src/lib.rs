pub mod alert;
pub mod config;
pub mod events;
pub mod filter;
pub mod routers;
pub mod rpc;
pub mod token;
pub mod watchdog;
