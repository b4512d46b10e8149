//! Per-pane navigation filtering.

use url::Url;

/// Decides whether a pane may navigate to a destination.
///
/// The default allows everything. A whitelist allows only destinations
/// whose host equals one of the listed hosts (ASCII case-insensitive).
/// Under a whitelist, destinations that are not absolute URLs are blocked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationFilter {
    allowed_hosts: Option<Vec<String>>,
}

impl NavigationFilter {
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Whitelist of hosts. Blank entries are dropped; an empty list allows
    /// everything.
    pub fn whitelist<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts: Vec<String> = hosts
            .into_iter()
            .map(|h| h.as_ref().trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        if hosts.is_empty() {
            Self::allow_all()
        } else {
            Self {
                allowed_hosts: Some(hosts),
            }
        }
    }

    /// Build from a configured mode string. Only `whitelist` (any case)
    /// restricts navigation.
    pub fn from_mode(mode: &str, hosts: &[String]) -> Self {
        if mode.trim().eq_ignore_ascii_case("whitelist") {
            Self::whitelist(hosts)
        } else {
            Self::allow_all()
        }
    }

    pub fn is_whitelist(&self) -> bool {
        self.allowed_hosts.is_some()
    }

    pub fn allowed_hosts(&self) -> Option<&[String]> {
        self.allowed_hosts.as_deref()
    }

    pub fn allows(&self, destination: &str) -> bool {
        let Some(hosts) = &self.allowed_hosts else {
            return true;
        };

        let Ok(url) = Url::parse(destination.trim()) else {
            return false;
        };

        url.host_str()
            .is_some_and(|host| hosts.iter().any(|h| h.eq_ignore_ascii_case(host)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn news_only() -> NavigationFilter {
        NavigationFilter::whitelist(["News.Example.com", "  "])
    }

    // -- Allowed --

    #[test]
    fn allows_everything_by_default() {
        let filter = NavigationFilter::allow_all();
        assert!(filter.allows("https://anything.example.org/path"));
        assert!(filter.allows("not even a url"));
        assert!(!filter.is_whitelist());
    }

    #[test]
    fn allows_listed_host_any_case() {
        let filter = news_only();
        assert!(filter.allows("https://news.example.com/today"));
        assert!(filter.allows("http://NEWS.example.com"));
        assert_eq!(filter.allowed_hosts(), Some(&["news.example.com".to_string()][..]));
    }

    #[test]
    fn allows_all_when_whitelist_is_empty() {
        let filter = NavigationFilter::from_mode("whitelist", &[" ".to_string()]);
        assert!(!filter.is_whitelist());
        assert!(filter.allows("https://elsewhere.example.org"));
    }

    #[test]
    fn allows_all_in_allow_mode_even_with_hosts() {
        let filter = NavigationFilter::from_mode("allow", &["a.example.com".to_string()]);
        assert!(filter.allows("https://b.example.com"));
    }

    // -- Blocked --

    #[test]
    fn blocks_other_hosts() {
        let filter = news_only();
        assert!(!filter.allows("https://evil.example.com"));
        assert!(!filter.allows("https://sub.news.example.com"));
    }

    #[test]
    fn blocks_unparseable_destinations() {
        let filter = NavigationFilter::from_mode("WhiteList", &["news.example.com".to_string()]);
        assert!(filter.is_whitelist());
        assert!(!filter.allows("news.example.com/relative"));
        assert!(!filter.allows(""));
    }

    #[test]
    fn blocks_hostless_schemes() {
        let filter = news_only();
        assert!(!filter.allows("about:blank"));
        assert!(!filter.allows("data:text/html,hi"));
    }
}
