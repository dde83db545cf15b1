pub mod bounds;
pub mod commands;
pub mod config;
pub mod connection;
pub mod coordinator;
pub mod decode;
pub mod discovery;
pub mod modbus;
pub mod output;
pub mod planner;
pub mod registers;
pub mod snapshot;

#[cfg(test)]
mod testing;
