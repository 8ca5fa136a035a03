//! XML sitemap generation over the public routes and the service catalog.

use chrono::Utc;
use url::Url;

use crate::content;

struct Entry {
    path: String,
    changefreq: &'static str,
    priority: &'static str,
}

fn entry(path: impl Into<String>, changefreq: &'static str, priority: &'static str) -> Entry {
    Entry {
        path: path.into(),
        changefreq,
        priority,
    }
}

/// Builds the sitemap for the given base URL. Pure; lastmod is the current date.
pub fn generate(base_url: &str) -> String {
    let lastmod = Utc::now().format("%Y-%m-%d").to_string();

    let mut entries = vec![entry("/", "weekly", "1.0"), entry("/services", "weekly", "0.9")];
    for service in content::all_services() {
        entries.push(entry(format!("/services/{}", service.slug), "monthly", "0.8"));
    }
    entries.push(entry("/gallery", "weekly", "0.7"));
    entries.push(entry("/contact", "monthly", "0.8"));
    entries.push(entry("/privacy", "yearly", "0.3"));
    entries.push(entry("/terms", "yearly", "0.3"));

    let mut xml = String::with_capacity(4096);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for item in &entries {
        xml.push_str("  <url>\n");
        xml.push_str("    <loc>");
        xml.push_str(&absolute(base_url, &item.path));
        xml.push_str("</loc>\n");
        xml.push_str("    <lastmod>");
        xml.push_str(&lastmod);
        xml.push_str("</lastmod>\n");
        xml.push_str("    <changefreq>");
        xml.push_str(item.changefreq);
        xml.push_str("</changefreq>\n");
        xml.push_str("    <priority>");
        xml.push_str(item.priority);
        xml.push_str("</priority>\n");
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Joins a route path onto the base URL, falling back to concatenation if the
/// base does not parse.
fn absolute(base: &str, path: &str) -> String {
    match Url::parse(base).and_then(|url| url.join(path)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", base.trim_end_matches('/'), path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_service_page() {
        let xml = generate("https://helloturf.com");
        for service in content::all_services() {
            let loc = format!("<loc>https://helloturf.com/services/{}</loc>", service.slug);
            assert!(xml.contains(&loc), "missing {}", service.slug);
        }
    }

    #[test]
    fn covers_static_pages() {
        let xml = generate("https://helloturf.com");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        for path in ["/", "/services", "/gallery", "/contact", "/privacy", "/terms"] {
            let loc = format!("<loc>https://helloturf.com{}</loc>", path);
            assert!(xml.contains(&loc), "missing {}", path);
        }
    }

    #[test]
    fn entry_count_matches_catalog() {
        let xml = generate("http://localhost:3000");
        let urls = xml.matches("<url>").count();
        assert_eq!(urls, 6 + content::all_services().len());
    }

    #[test]
    fn trailing_slash_base_joins_cleanly() {
        let xml = generate("https://helloturf.com/");
        assert!(xml.contains("<loc>https://helloturf.com/gallery</loc>"));
        assert!(!xml.contains("helloturf.com//"));
    }

    #[test]
    fn home_priority_is_highest() {
        let xml = generate("https://helloturf.com");
        let home_block = xml.split("<url>").nth(1).unwrap();
        assert!(home_block.contains("<priority>1.0</priority>"));
        assert!(home_block.contains("<changefreq>weekly</changefreq>"));
    }
}
