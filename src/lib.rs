pub mod config;
pub mod fifo;
pub mod permissions;
