pub mod commands;
pub mod handlers;

pub use commands::{CLAP_STYLING, command_argument_builder};
pub use handlers::{config_from_matches, handle_crawl, parse_seed_url, run_crawl};
