use dioxus::prelude::*;
use site_types::AuthorProfile;

use crate::components::{ExternalLink, SocialLinks};

/// Role line followed by the social link table.
#[component]
pub fn AuthorBio(author: AuthorProfile) -> Element {
    let AuthorProfile { role, links } = author;

    rsx! {
        div {
            div { style: "margin: 10px 0",
                {role.prefix}
                ExternalLink { href: role.org_url, {role.org_name} }
                {role.suffix}
            }
            SocialLinks { links }
        }
    }
}
