// Library for tests and the view binary to access modules

pub mod aggregator;
pub mod config;
pub mod generator;
pub mod logging;
pub mod models;
pub mod poller;
pub mod routes;
pub mod source;
pub mod tui;
pub mod version;
pub mod view;
