use crate::error::{IntrospectError, IntrospectResult};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, trace};

/// Result of executing a git command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Executes git commands within a repository
///
/// The working directory is carried explicitly with every invocation rather
/// than inherited from ambient process state, so executors for different
/// repositories can run concurrently.
#[derive(Debug)]
pub struct GitExecutor {
    repo_path: PathBuf,
}

impl GitExecutor {
    /// Create a new GitExecutor for the given repository path
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Execute a git command and return the captured output
    ///
    /// Arguments are passed as an explicit argv slice, without "git" itself.
    /// Example: executor.execute(&["rev-parse", "HEAD"])
    ///
    /// The child process is fully drained and reaped before this returns;
    /// no process handle outlives the call.
    pub fn execute(&self, args: &[&str]) -> IntrospectResult<CommandOutput> {
        if args.is_empty() {
            return Err(IntrospectError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty git command",
            )));
        }

        trace!(
            cmd = %format!("git {}", args.join(" ")),
            dir = %self.repo_path.display(),
            "running git command"
        );

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    IntrospectError::GitNotInstalled
                } else {
                    IntrospectError::Io(e)
                }
            })?;

        self.process_output(output, args)
    }

    /// Process raw process output into CommandOutput
    fn process_output(&self, output: Output, args: &[&str]) -> IntrospectResult<CommandOutput> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        if !success {
            debug!(
                cmd = %format!("git {}", args.join(" ")),
                exit_code,
                stderr = %stderr.trim(),
                "git command failed"
            );

            return Err(IntrospectError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                exit_code,
                stdout: stdout.trim().to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            success,
        })
    }

    /// Get the repository path
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let repo_path = temp_dir.path().to_path_buf();

        // Initialize git repo
        Command::new("git")
            .args(["init"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        // Configure git
        Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        Command::new("git")
            .args(["config", "user.email", "test@example.com"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        (temp_dir, repo_path)
    }

    #[test]
    fn test_execute_status() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        let result = executor.execute(&["status", "--porcelain"]);
        assert!(result.is_ok());

        let output = result.unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn test_execute_rev_parse_empty_repo() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        // HEAD does not resolve before the first commit
        let result = executor.execute(&["rev-parse", "HEAD"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_carries_diagnostics() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        let err = executor.execute(&["rev-parse", "HEAD"]).unwrap_err();
        match err {
            IntrospectError::CommandFailed {
                command,
                exit_code,
                stderr,
                ..
            } => {
                assert_eq!(command, "git rev-parse HEAD");
                assert_ne!(exit_code, 0);
                assert!(!stderr.is_empty());
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_command() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        let result = executor.execute(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_repo_path() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        assert_eq!(executor.repo_path(), repo_path.as_path());
    }
}
