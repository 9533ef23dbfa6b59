use site_types::{NavigationContext, SiteConfig};
use site_ui::render_page_shell;

pub const TITLE: &str = "My Blog";
pub const CONTENT: &str = r#"<article class="post"><h2>Hello</h2><p>First &amp; only.</p></article>"#;

/// Config with the canonical author table and no deployment prefix.
pub fn default_site() -> SiteConfig {
    SiteConfig::new(TITLE, "")
}

/// Render `path` with `site`, returning the whole page and its header region.
pub fn render(site: &SiteConfig, path: &str) -> (String, String) {
    let html = render_page_shell(&NavigationContext::new(path), site, CONTENT);
    let header = header_region(&html)
        .expect("rendered page has a header region")
        .to_string();
    (html, header)
}

/// Number of anchor elements in a fragment.
pub fn anchor_count(html: &str) -> usize {
    html.matches("<a ").count() + html.matches("<a>").count()
}

/// Extract the markup between `<header ...>` and `</header>`.
pub fn header_region(html: &str) -> Option<&str> {
    let open = html.find("<header")?;
    let start = open + html[open..].find('>')? + 1;
    let end = start + html[start..].find("</header>")?;
    Some(&html[start..end])
}

#[test]
fn header_region_slices_inner_markup() {
    let html = r#"<div><header class="global-header"><a href="/">Home</a></header><main></main></div>"#;
    assert_eq!(header_region(html), Some(r#"<a href="/">Home</a>"#));
    assert_eq!(header_region("<main></main>"), None);
    assert_eq!(header_region("<header class=\"x\">unterminated"), None);
}
