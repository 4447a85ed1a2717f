use crate::error::{IntrospectError, IntrospectResult};

/// A remote URL broken into its identifying parts
///
/// Parsing is a pure function of the URL text; no network access is
/// performed. Accepted transport forms:
///
/// - scp-style:  `git@github.com:owner/name.git`
/// - ssh:        `ssh://git@github.com/owner/name.git`
/// - https/http: `https://github.com/owner/name.git`
/// - git:        `git://github.com/owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl RemoteUrl {
    /// Parse a remote URL into host, owner, and repository name
    pub fn parse(url: &str) -> IntrospectResult<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(IntrospectError::Parse("empty remote URL".to_string()));
        }

        let (host, path) = if let Some((_scheme, rest)) = url.split_once("://") {
            rest.split_once('/').ok_or_else(|| {
                IntrospectError::Parse(format!("remote URL has no path: {}", url))
            })?
        } else if let Some((host, path)) = url.split_once(':') {
            // scp-style, e.g. git@github.com:owner/name.git
            (host, path)
        } else {
            return Err(IntrospectError::Parse(format!(
                "unrecognized remote URL form: {}",
                url
            )));
        };

        // Drop user info and any port from the host portion
        let host = host.rsplit_once('@').map_or(host, |(_, h)| h);
        let host = host.split(':').next().unwrap_or(host);

        if host.is_empty() {
            return Err(IntrospectError::Parse(format!(
                "remote URL has no host: {}",
                url
            )));
        }

        let path = path.trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);

        let mut segments = path.split('/');
        let (owner, name) = match (segments.next(), segments.next(), segments.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                (owner, name)
            }
            _ => {
                return Err(IntrospectError::Parse(format!(
                    "remote URL path is not of the form owner/name: {}",
                    url
                )));
            }
        };

        Ok(RemoteUrl {
            host: host.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

/// Maps remote host names to short provider prefixes
///
/// The table is explicit and extensible; unknown hosts are an error rather
/// than a guessed prefix.
#[derive(Debug, Clone)]
pub struct ProviderMap {
    entries: Vec<(String, String)>,
}

impl ProviderMap {
    /// The built-in host to prefix table
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                ("github.com".to_string(), "g".to_string()),
                ("bitbucket.org".to_string(), "b".to_string()),
                ("gitlab.com".to_string(), "gl".to_string()),
            ],
        }
    }

    /// Add or override a host to prefix mapping
    pub fn insert(&mut self, host: impl Into<String>, prefix: impl Into<String>) {
        let host = host.into();
        if let Some(entry) = self.entries.iter_mut().find(|(h, _)| *h == host) {
            entry.1 = prefix.into();
        } else {
            self.entries.push((host, prefix.into()));
        }
    }

    /// Look up the prefix for a host
    pub fn prefix_for(&self, host: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(h, _)| h == host)
            .map(|(_, p)| p.as_str())
    }

    /// Derive the qualified name for a parsed remote URL
    ///
    /// Returns `<prefix>/<owner>/<name>`, e.g. `g/schmittjoh/metadata`.
    pub fn qualified_name(&self, remote: &RemoteUrl) -> IntrospectResult<String> {
        let prefix = self.prefix_for(&remote.host).ok_or_else(|| {
            IntrospectError::Parse(format!(
                "unrecognized hosting provider: {}",
                remote.host
            ))
        })?;

        Ok(format!("{}/{}/{}", prefix, remote.owner, remote.name))
    }
}

impl Default for ProviderMap {
    fn default() -> Self {
        Self::builtin()
    }
}
