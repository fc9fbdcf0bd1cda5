mod args;
mod config;
mod io;
mod site_map;
mod sitemap;
mod url;

use crate::args::parse_args;
use crate::config::{Config, BASE_URL_ENV};
use crate::io::{print_error, print_info};
use crate::sitemap::generate_sitemap_xml;

fn main() {
    let args = parse_args();
    let config = Config::from_args(args, std::env::var(BASE_URL_ENV).ok());

    if config.verbose {
        print_info("Verbose mode enabled.");
        print_info(&format!("Site root: {}", config.root.display()));
        print_info(&format!("Base URL: {}", config.base_url));
    }

    if let Err(e) = generate_sitemap_xml(&config) {
        print_error(&format!("Sitemap generation failed: {}", e));
        std::process::exit(1);
    }
}
