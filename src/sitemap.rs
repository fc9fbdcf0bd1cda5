use std::{collections::BTreeSet, io};

use crate::config::{Config, SiteMap, CHANGEFREQ};
use crate::io::{print_info, print_warning, write_sitemap};
use crate::site_map::build_site_map;
use crate::url::{folder_url, is_folder_index, priority_for, to_url};

/// Map every page to its URL, adding the folder URL for subdirectory index
/// pages. The set keeps URLs unique and in ascending order.
pub fn collect_urls(site_map: &SiteMap, config: &Config) -> BTreeSet<String> {
    let mut urls = BTreeSet::new();

    for rel_path in site_map {
        let url = to_url(rel_path, config);

        if is_folder_index(rel_path) {
            urls.insert(folder_url(&url));
        }
        urls.insert(url);
    }

    urls
}

pub fn render_sitemap(urls: &BTreeSet<String>, config: &Config) -> String {
    let entries: Vec<String> = urls
        .iter()
        .map(|url| {
            format!(
                "  <url>\n    <loc>{}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
                escape_xml(url),
                CHANGEFREQ,
                priority_for(url, config)
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>\n",
        entries.join("\n")
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Walk the root, build the document and overwrite `config.output`.
/// Returns the number of `<url>` entries written.
pub fn generate_sitemap_xml(config: &Config) -> io::Result<usize> {
    let site_map = build_site_map(&config.root)?;

    if config.verbose {
        print_info(&format!("Identified {} page files.", site_map.len()));
    }
    if site_map.is_empty() {
        print_warning(&format!(
            "No HTML pages found under {}; writing an empty sitemap.",
            config.root.display()
        ));
    }

    let urls = collect_urls(&site_map, config);
    let xml_content = render_sitemap(&urls, config);

    write_sitemap(config, &xml_content)?;

    if config.verbose {
        print_info(&format!(
            "Successfully generated sitemap.xml with {} URLs at: {}",
            urls.len(),
            config.output.display()
        ));
    }

    Ok(urls.len())
}
