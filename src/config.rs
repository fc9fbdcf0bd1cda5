use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    pub source: PathBuf,
    pub verbose: bool,
}

/// Everything the pipeline needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // Directory that is scanned and that relative paths are computed against
    pub root: PathBuf,
    // Absolute URL prefix, never ends with '/'
    pub base_url: String,
    // Where sitemap.xml is written
    pub output: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn new(root: PathBuf, base_url_env: Option<String>, verbose: bool) -> Self {
        let base_url = base_url_env
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let output = root.join(SITEMAP_FILE);

        Config {
            root,
            base_url,
            output,
            verbose,
        }
    }

    pub fn from_args(args: Args, base_url_env: Option<String>) -> Self {
        Config::new(args.source, base_url_env, args.verbose)
    }

    /// The canonical site root, e.g. "https://example.com/".
    pub fn root_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}

/// Page files found under the root, relative to it, in discovery order.
pub type SiteMap = Vec<PathBuf>;

pub const BASE_URL_ENV: &str = "BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://quietmoon.plnt.earth";

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const INDEX_FILE: &str = "index.html";

/// Directory names that are never descended into, wherever they appear.
pub const EXCLUDE_DIRS: [&str; 6] = [".git", "node_modules", ".dist", "dist", "build", ".github"];
/// Lowercase extensions (without the dot) of files that become sitemap entries.
pub const INCLUDE_EXT: [&str; 1] = ["html"];
/// Dot-prefixed name that is still walked.
pub const WELL_KNOWN_DIR: &str = ".well-known";

pub const CHANGEFREQ: &str = "weekly";
pub const ROOT_PRIORITY: &str = "1.0";
pub const PAGE_PRIORITY: &str = "0.7";

pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_CYAN: &str = "\x1b[36m";
pub const COLOR_RESET: &str = "\x1b[0m";
