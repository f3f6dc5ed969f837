pub mod command;

pub mod cli;
pub mod error;
pub mod jsonstructs_update;
pub mod processor_env;
pub mod resolver;
pub mod transport;
pub mod utils;
pub mod version_table;
