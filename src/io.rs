use crate::config::{Config, COLOR_CYAN, COLOR_RED, COLOR_RESET, COLOR_YELLOW};
use std::{fs, io};

pub fn print_error(message: &str) {
    eprintln!("{}ERROR{}: {}", COLOR_RED, COLOR_RESET, message);
}

pub fn print_warning(message: &str) {
    eprintln!("{}WARNING{}: {}", COLOR_YELLOW, COLOR_RESET, message);
}

pub fn print_info(message: &str) {
    eprintln!("{}INFO{}: {}", COLOR_CYAN, COLOR_RESET, message);
}

/// Replace the sitemap file with `xml` in one write.
pub fn write_sitemap(config: &Config, xml: &str) -> io::Result<()> {
    if config.verbose {
        print_info(&format!(
            "Writing {} bytes to: {}",
            xml.len(),
            config.output.display()
        ));
    }

    fs::write(&config.output, xml).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Unable to write {}: {}", config.output.display(), e),
        )
    })
}
