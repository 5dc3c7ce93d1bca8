mod config;
mod push;

pub use config::run_config;
pub use push::run_push;
