#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod cli;
pub use cli::{Cli, Commands, ProductArgs};

mod commands;

mod config;
pub use config::{AppConfig, ViewConfig};

mod seed;
pub use seed::{SeedConfig, builtin_catalog};

mod views;
pub use views::View;
