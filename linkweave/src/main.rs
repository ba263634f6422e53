use linkweave::{command_argument_builder, handle_crawl};
use linkweave_core::{LogSettings, logging::init_logging};

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging(&LogSettings::from_env()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let matches = command_argument_builder().get_matches();
    handle_crawl(&matches).await;
}
