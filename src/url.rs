use std::{
    path::{Component, Path},
    sync::OnceLock,
};

use regex::Regex;

use crate::config::{Config, INDEX_FILE, PAGE_PRIORITY, ROOT_PRIORITY};

/// Characters left untouched when encoding a full URI.
const URI_SAFE: &[u8] = b"-_.!~*'();,/?:@&=+$#";

/// Join the normal components of `rel_path` with '/', whatever the host separator is.
pub fn web_path(rel_path: &Path) -> String {
    rel_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(os_str) => Some(os_str.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub fn to_url(rel_path: &Path, config: &Config) -> String {
    let web_path = web_path(rel_path);

    if web_path.to_lowercase() == INDEX_FILE {
        return config.root_url();
    }

    format!("{}/{}", config.base_url, encode_uri(&web_path))
}

/// True for an index page inside a subdirectory (never the root one).
pub fn is_folder_index(rel_path: &Path) -> bool {
    web_path(rel_path)
        .to_lowercase()
        .ends_with(&format!("/{}", INDEX_FILE))
}

/// Strip a trailing index file name from `url` and make sure it ends with '/'.
pub fn folder_url(url: &str) -> String {
    static INDEX_SUFFIX: OnceLock<Regex> = OnceLock::new();
    let index_suffix = INDEX_SUFFIX.get_or_init(|| Regex::new(r"(?i)index\.html$").unwrap());

    let folder = index_suffix.replace(url, "");
    if folder.ends_with('/') {
        folder.into_owned()
    } else {
        format!("{}/", folder)
    }
}

pub fn priority_for(url: &str, config: &Config) -> &'static str {
    if url.strip_suffix('/') == Some(config.base_url.as_str()) {
        ROOT_PRIORITY
    } else {
        PAGE_PRIORITY
    }
}

/// Percent-encode everything outside the URI-safe set, byte by byte over UTF-8.
pub fn encode_uri(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());

    for &byte in input.as_bytes() {
        if byte.is_ascii_alphanumeric() || URI_SAFE.contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    encoded
}
