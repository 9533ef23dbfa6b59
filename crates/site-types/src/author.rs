use serde::{Deserialize, Serialize};

/// One labelled external profile, rendered as `Label: text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub text: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(label: impl Into<String>, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            url: url.into(),
        }
    }
}

/// The author's role line: `{prefix}<a href=org_url>{org_name}</a>{suffix}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleLine {
    pub prefix: String,
    pub org_name: String,
    pub org_url: String,
    pub suffix: String,
}

impl Default for RoleLine {
    fn default() -> Self {
        Self {
            prefix: "Software Engineer at ".to_string(),
            org_name: "PSE".to_string(),
            org_url: "https://pse.dev/".to_string(),
            suffix: " (Ethereum Foundation)".to_string(),
        }
    }
}

/// Author bio shown on the landing page.
///
/// `Default` is the canonical profile. A config file may replace the role
/// line or the whole link table; links keep the order they are given in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorProfile {
    pub role: RoleLine,
    pub links: Vec<SocialLink>,
}

impl Default for AuthorProfile {
    fn default() -> Self {
        Self {
            role: RoleLine::default(),
            links: default_links(),
        }
    }
}

fn default_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new("Github", "saleel", "https://github.com/saleel"),
        SocialLink::new("Farcaster", "saleel", "https://warpcast.com/saleel"),
        SocialLink::new("Twitter", "_saleel", "https://twitter.com/_saleel"),
        SocialLink::new("Telegram", "saleelp", "https://tttttt.me/saleelp"),
    ]
}
