pub mod config;
pub mod connection;
pub mod counter;
pub mod generator;
pub mod logger;
pub mod model;
