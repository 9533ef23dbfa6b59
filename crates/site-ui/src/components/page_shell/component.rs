use dioxus::prelude::*;
use site_types::{NavigationContext, SiteConfig};

use crate::components::SiteHeader;
use crate::HeaderKind;

/// Site-wide page wrapper: header region followed by the page content.
///
/// The outer container carries `data-is-root-path` so stylesheets can key
/// on the landing page.
#[component]
pub fn PageShell(nav: NavigationContext, site: SiteConfig, children: Element) -> Element {
    let kind = HeaderKind::for_site(&nav, &site);

    rsx! {
        ShellFrame { kind,
            main { {children} }
        }
    }
}

/// [`PageShell`] for content that was already rendered to HTML elsewhere.
/// `content_html` is inserted into `main` as-is.
#[component]
pub fn HtmlPageShell(nav: NavigationContext, site: SiteConfig, content_html: String) -> Element {
    let kind = HeaderKind::for_site(&nav, &site);

    rsx! {
        ShellFrame { kind,
            main { dangerous_inner_html: "{content_html}" }
        }
    }
}

#[component]
fn ShellFrame(kind: HeaderKind, children: Element) -> Element {
    let marker = kind.root_marker();

    rsx! {
        div { class: "global-wrapper", "data-is-root-path": marker,
            header { class: "global-header",
                SiteHeader { kind }
            }
            {children}
        }
    }
}
