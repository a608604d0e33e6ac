//! Git object store access
//!
//! Reads the commit to rewrite, writes the rewritten commit and moves the
//! current branch, by running the `git` binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use thiserror::Error;
use vanity_core::DIGEST_SIZE;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),

    #[error("git {args} failed: {stderr}")]
    Command { args: String, stderr: String },

    #[error("{rev} is a {kind} object; expected a commit")]
    NotACommit { rev: String, kind: String },

    #[error("git printed a malformed object id: {0:?}")]
    BadObjectId(String),

    #[error("hash mismatch: searched {expected}, git wrote {actual}")]
    HashMismatch { expected: String, actual: String },
}

pub type Result<T> = std::result::Result<T, GitError>;

/// Handle on a repository, by working directory
#[derive(Debug, Clone, Default)]
pub struct Git {
    dir: Option<PathBuf>,
}

impl Git {
    /// Use the repository of the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the repository containing `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Abbreviated object id of `rev` (12 hex digits)
    pub fn rev_parse_short(&self, rev: &str) -> Result<String> {
        let out = self.run(&["rev-parse", "--short=12", "--verify", rev], None)?;
        Ok(trim_output(&out))
    }

    /// Full object id of `rev`
    pub fn rev_parse(&self, rev: &str) -> Result<String> {
        let out = self.run(&["rev-parse", "--verify", rev], None)?;
        Ok(trim_output(&out))
    }

    /// Raw commit object of `rev`, as printed by `git cat-file commit`.
    pub fn fetch_commit(&self, rev: &str) -> Result<Vec<u8>> {
        let kind = trim_output(&self.run(&["cat-file", "-t", rev], None)?);
        if kind != "commit" {
            return Err(GitError::NotACommit {
                rev: self.rev_parse_short(rev)?,
                kind,
            });
        }

        self.run(&["cat-file", "commit", rev], None)
    }

    /// Write `commit` to the object store and check git computed `expected`.
    ///
    /// Returns the hex object id.
    pub fn write_commit(&self, commit: &[u8], expected: &[u8; DIGEST_SIZE]) -> Result<String> {
        let out = self.run(&["hash-object", "--stdin", "-t", "commit", "-w"], Some(commit))?;
        let written = trim_output(&out);

        if parse_object_id(&written)? != *expected {
            return Err(GitError::HashMismatch {
                expected: hex::encode(expected),
                actual: written,
            });
        }

        Ok(written)
    }

    /// Point the current branch at `hash`, keeping the working tree.
    pub fn reset_to(&self, hash: &str) -> Result<()> {
        self.run(&["reset", "--quiet", hash], None)?;
        Ok(())
    }

    fn run(&self, args: &[&str], input: Option<&[u8]>) -> Result<Vec<u8>> {
        let mut cmd = Command::new("git");
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd.args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!(args = %args.join(" "), "running git");

        let mut child = cmd.spawn()?;

        let output = match (input, child.stdin.take()) {
            (Some(bytes), Some(mut stdin)) => thread::scope(|scope| {
                // A write failure means git exited early; its status says why.
                scope.spawn(move || {
                    let _ = stdin.write_all(bytes);
                });
                child.wait_with_output()
            })?,
            _ => child.wait_with_output()?,
        };

        if !output.status.success() {
            return Err(GitError::Command {
                args: args.join(" "),
                stderr: trim_output(&output.stderr),
            });
        }

        Ok(output.stdout)
    }
}

/// Command output as a string without surrounding whitespace
fn trim_output(out: &[u8]) -> String {
    String::from_utf8_lossy(out).trim().to_string()
}

/// Decode a 40-character hex object id
fn parse_object_id(id: &str) -> Result<[u8; DIGEST_SIZE]> {
    let mut oid = [0u8; DIGEST_SIZE];
    hex::decode_to_slice(id, &mut oid).map_err(|_| GitError::BadObjectId(id.to_string()))?;
    Ok(oid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_output() {
        assert_eq!(trim_output(b"0123abcd\n"), "0123abcd");
        assert_eq!(trim_output(b"  commit \r\n"), "commit");
        assert_eq!(trim_output(b""), "");
    }

    #[test]
    fn test_parse_object_id() {
        let oid = parse_object_id("034c4f788c4a7522a75e1b86ee3c24eee630e822").unwrap();
        assert_eq!(oid[0], 0x03);
        assert_eq!(oid[19], 0x22);

        assert!(matches!(
            parse_object_id("034c4f78"),
            Err(GitError::BadObjectId(_))
        ));
        assert!(matches!(
            parse_object_id("zz4c4f788c4a7522a75e1b86ee3c24eee630e822"),
            Err(GitError::BadObjectId(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = GitError::NotACommit {
            rev: "0123456789ab".to_string(),
            kind: "tree".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "0123456789ab is a tree object; expected a commit"
        );

        let err = GitError::Command {
            args: "cat-file -t nope".to_string(),
            stderr: "fatal: Not a valid object name nope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "git cat-file -t nope failed: fatal: Not a valid object name nope"
        );
    }
}
