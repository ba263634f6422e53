use clap::{arg, value_parser};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("linkweave")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linkweave")
        .about("Crawl outward from a seed URL and print the tree of pages discovered")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress the progress spinner and status lines").required(false))
        .arg(
            arg!(-u --"url" <URL>)
                .required(true)
                .env("URL")
                .help("URL that the crawl will be started on"),
        )
        .arg(
            arg!(-d --"depth" <DEPTH>)
                .required(false)
                .env("DEPTH")
                .help("How many links deep the crawler should follow")
                .default_value("2"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
}
