use site_types::{AuthorProfile, NavigationContext, PathPrefix, SiteConfig, SiteIdentity};

/// What the header region shows for a given page.
///
/// Decided once per render by [`HeaderKind::for_page`]; the
/// [`SiteHeader`](crate::SiteHeader) component only matches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderKind {
    /// Landing page: title heading, author bio and social links.
    Root {
        title: String,
        root_path: String,
        author: AuthorProfile,
    },
    /// Any other page: a single link back home.
    NonRoot { root_path: String },
}

impl HeaderKind {
    pub fn for_page(
        nav: &NavigationContext,
        prefix: &PathPrefix,
        identity: &SiteIdentity,
        author: &AuthorProfile,
    ) -> Self {
        let root_path = prefix.root_path();
        if nav.is_root(prefix) {
            HeaderKind::Root {
                title: identity.title.clone(),
                root_path,
                author: author.clone(),
            }
        } else {
            HeaderKind::NonRoot { root_path }
        }
    }

    pub fn for_site(nav: &NavigationContext, site: &SiteConfig) -> Self {
        Self::for_page(nav, site.path_prefix(), &site.identity(), &site.author)
    }

    pub fn is_root(&self) -> bool {
        matches!(self, HeaderKind::Root { .. })
    }

    pub fn root_path(&self) -> &str {
        match self {
            HeaderKind::Root { root_path, .. } | HeaderKind::NonRoot { root_path } => root_path,
        }
    }

    /// Value of the outer container's `data-is-root-path` attribute.
    pub fn root_marker(&self) -> &'static str {
        if self.is_root() {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn site(prefix: &str) -> SiteConfig {
        SiteConfig::new("My Blog", prefix)
    }

    #[test]
    fn slash_without_prefix_is_root() {
        let kind = HeaderKind::for_site(&NavigationContext::new("/"), &site(""));
        assert_eq!(
            kind,
            HeaderKind::Root {
                title: "My Blog".to_string(),
                root_path: "/".to_string(),
                author: AuthorProfile::default(),
            }
        );
        assert_eq!(kind.root_marker(), "true");
    }

    #[test]
    fn post_path_is_not_root() {
        let kind = HeaderKind::for_site(&NavigationContext::new("/posts/my-post/"), &site(""));
        assert_eq!(
            kind,
            HeaderKind::NonRoot {
                root_path: "/".to_string()
            }
        );
        assert_eq!(kind.root_marker(), "false");
    }

    #[test]
    fn index_is_not_root() {
        let kind = HeaderKind::for_site(&NavigationContext::new("/index"), &site(""));
        assert!(!kind.is_root());
    }

    #[test]
    fn prefixed_site_roots_at_prefix() {
        let blog = site("/blog");
        assert!(HeaderKind::for_site(&NavigationContext::new("/blog/"), &blog).is_root());
        let kind = HeaderKind::for_site(&NavigationContext::new("/"), &blog);
        assert!(!kind.is_root());
        assert_eq!(kind.root_path(), "/blog/");
    }

    #[test]
    fn empty_title_is_kept_verbatim() {
        let kind = HeaderKind::for_site(&NavigationContext::new("/"), &SiteConfig::new("", ""));
        match kind {
            HeaderKind::Root { title, .. } => assert_eq!(title, ""),
            other => panic!("expected root header, got {other:?}"),
        }
    }
}
