pub mod cli;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod session;
pub mod shutdown;
pub mod store;
pub mod ui;
