use crate::error::{IntrospectError, IntrospectResult};
use crate::git::executor::GitExecutor;
use crate::git::remote::{ProviderMap, RemoteUrl};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An identifier for a single revision in repository history
///
/// Well-formed identifiers are non-empty and contain only hexadecimal
/// characters; anything else coming back from git indicates an upstream
/// error and is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevisionId(String);

impl RevisionId {
    /// Validate a trimmed line of git output as a revision identifier
    pub fn parse(text: &str) -> IntrospectResult<Self> {
        if text.is_empty() {
            return Err(IntrospectError::Parse(
                "empty revision identifier".to_string(),
            ));
        }

        if !text.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IntrospectError::Parse(format!(
                "revision identifier is not hexadecimal: {}",
                text
            )));
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answers identity and history-linkage queries against a repository
/// without mutating it
///
/// Stateless between calls apart from the bound path; every query re-reads
/// repository state through one fresh subprocess.
#[derive(Debug)]
pub struct RepositoryIntrospector {
    path: PathBuf,
    executor: GitExecutor,
    providers: ProviderMap,
}

impl RepositoryIntrospector {
    /// Create an introspector for a repository working directory
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_providers(path, ProviderMap::builtin())
    }

    /// Create an introspector with a custom provider table
    pub fn with_providers<P: AsRef<Path>>(path: P, providers: ProviderMap) -> Self {
        let path = path.as_ref().to_path_buf();
        let executor = GitExecutor::new(&path);

        Self {
            path,
            executor,
            providers,
        }
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Derive the qualified name from the configured remote origin URL
    ///
    /// Returns `<prefix>/<owner>/<name>`, e.g. `g/schmittjoh/metadata`.
    /// A repository without a configured origin is a parse failure, not a
    /// process failure: there is nothing to retry.
    pub fn qualified_name(&self) -> IntrospectResult<String> {
        let output = self
            .executor
            .execute(&["config", "--get", "remote.origin.url"])
            .map_err(|e| match e {
                IntrospectError::CommandFailed { .. } => IntrospectError::Parse(format!(
                    "no remote origin configured for {}",
                    self.path.display()
                )),
                other => other,
            })?;

        let url = output.stdout.trim();
        let remote = RemoteUrl::parse(url)?;
        let name = self.providers.qualified_name(&remote)?;

        debug!(url = %url, name = %name, "derived qualified name");
        Ok(name)
    }

    /// Resolve `HEAD` to a full revision identifier
    pub fn current_revision(&self) -> IntrospectResult<RevisionId> {
        let output = self.executor.execute(&["rev-parse", "HEAD"])?;
        parse_revision(&output.stdout)
    }

    /// List the parent revisions of `HEAD`, first parent first
    ///
    /// A root commit has no parents and yields an empty list.
    pub fn current_parents(&self) -> IntrospectResult<Vec<RevisionId>> {
        let output = self.executor.execute(&["rev-parse", "HEAD^@"])?;
        parse_parents(&output.stdout)
    }
}

/// Parse the single-identifier output of a revision resolution
fn parse_revision(stdout: &str) -> IntrospectResult<RevisionId> {
    RevisionId::parse(stdout.trim())
}

/// Parse line-oriented parent listing output, one identifier per line
///
/// Order is preserved as reported; a trailing empty line is discarded.
fn parse_parents(stdout: &str) -> IntrospectResult<Vec<RevisionId>> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(RevisionId::parse)
        .collect()
}
