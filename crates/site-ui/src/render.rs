//! Server-side rendering entry points for hosts that want HTML strings.

use dioxus::prelude::*;
use site_types::{NavigationContext, SiteConfig};

use crate::components::{HtmlPageShell, SiteHeader};
use crate::HeaderKind;

/// Render the full page shell around pre-rendered `content_html`.
pub fn render_page_shell(nav: &NavigationContext, site: &SiteConfig, content_html: &str) -> String {
    let nav = nav.clone();
    let site = site.clone();
    let content_html = content_html.to_string();

    dioxus_ssr::render_element(rsx! {
        HtmlPageShell { nav, site, content_html }
    })
}

/// Render only the header region's contents for an already-resolved page.
pub fn render_header(kind: &HeaderKind) -> String {
    let kind = kind.clone();

    dioxus_ssr::render_element(rsx! {
        SiteHeader { kind }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header_region(html: &str) -> Option<&str> {
        let open = html.find("<header")?;
        let start = open + html[open..].find('>')? + 1;
        let end = start + html[start..].find("</header>")?;
        Some(&html[start..end])
    }

    #[test]
    fn rendered_header_matches_shell_header() {
        let site = SiteConfig::new("My Blog", "");
        let nav = NavigationContext::new("/about/");
        let page = render_page_shell(&nav, &site, "");
        let kind = HeaderKind::for_site(&nav, &site);
        assert_eq!(header_region(&page), Some(render_header(&kind).as_str()));
    }
}
