pub mod args;
pub mod config;
pub mod db;
pub mod history;
pub mod ledger;
pub mod logging;
pub mod timer;
pub mod ui;
