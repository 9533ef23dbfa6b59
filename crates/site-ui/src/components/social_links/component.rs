use dioxus::prelude::*;
use site_types::SocialLink;

/// Visual separator placed between consecutive social links.
pub const LINK_SEPARATOR: &str = "\u{a0} | \u{a0}";

/// Link to another site, opened in a new browsing context without
/// leaking the referrer.
#[component]
pub fn ExternalLink(href: String, children: Element) -> Element {
    rsx! {
        a {
            target: "_blank",
            rel: "nofollow noreferrer",
            href: "{href}",
            {children}
        }
    }
}

/// Ordered `Label: handle` pairs separated by [`LINK_SEPARATOR`].
#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> Element {
    rsx! {
        for (index, link) in links.iter().enumerate() {
            if index > 0 {
                span { {LINK_SEPARATOR} }
            }
            span {
                strong { {link.label.clone()} }
                ": "
                ExternalLink { href: link.url.clone(), {link.text.clone()} }
            }
        }
    }
}
