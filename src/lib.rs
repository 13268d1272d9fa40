pub mod cli;
pub mod configuration;
pub mod controller;
pub mod encoding;
pub mod error_handling;
pub mod generation;
pub mod retention;
pub mod storage;
pub mod validation;
pub mod web_interface;
