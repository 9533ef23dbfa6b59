use dioxus::prelude::*;
use site_types::AuthorProfile;

use crate::components::AuthorBio;
use crate::HeaderKind;

/// Renders whichever header variant the page resolved to.
#[component]
pub fn SiteHeader(kind: HeaderKind) -> Element {
    match kind {
        HeaderKind::Root {
            title,
            root_path,
            author,
        } => rsx! {
            RootHeader { title, root_path, author }
        },
        HeaderKind::NonRoot { root_path } => rsx! {
            HomeLink { root_path }
        },
    }
}

/// Landing-page header: site title heading, author bio, rule.
#[component]
pub fn RootHeader(title: String, root_path: String, author: AuthorProfile) -> Element {
    rsx! {
        h1 { class: "main-heading",
            a { href: "{root_path}", {title} }
        }
        AuthorBio { author }
        hr {}
    }
}

/// Link back to the landing page shown on every other page.
#[component]
pub fn HomeLink(root_path: String) -> Element {
    rsx! {
        a { class: "header-link-home", href: "{root_path}", "Home" }
    }
}
