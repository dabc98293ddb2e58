//! svn command runner.
//!
//! Provides a safe wrapper around svn commands with captured stdout/stderr
//! and structured error handling. The parser never touches a subprocess;
//! this module only acquires raw log text for it.

use crate::error::{Result, SvnLogError};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful svn command execution.
#[derive(Debug, Clone)]
pub struct SvnOutput {
    /// Standard output from the command.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl SvnOutput {
    /// Create a new SvnOutput from raw output bytes. stdout is kept
    /// verbatim: the log parser owns all whitespace handling.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run an svn command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The svn command arguments (without the "svn" prefix)
///
/// # Returns
///
/// * `Ok(SvnOutput)` - On successful execution (exit code 0)
/// * `Err(SvnLogError::Svn)` - On spawn failure or non-zero exit
pub fn run_svn<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<SvnOutput> {
    let output = Command::new("svn")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            SvnLogError::Svn(format!(
                "failed to execute svn {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let svn_output = SvnOutput::from_output(&output);

    if !output.status.success() {
        return Err(SvnLogError::Svn(format!(
            "svn {} exited with {}: {}",
            args.first().unwrap_or(&""),
            output.status,
            svn_output.stderr
        )));
    }

    Ok(svn_output)
}

/// Build the argument list for a verbose log query.
///
/// `target` is a working-copy path or repository URL; omitted, svn uses
/// the current directory's working copy.
pub fn log_args(target: Option<&str>) -> Vec<&str> {
    let mut args = vec!["log", "-v"];
    if let Some(target) = target {
        args.push(target);
    }
    args
}

/// Run `svn log -v` and return its raw output for the parser.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `target` - Optional working-copy path or repository URL
///
/// # Returns
///
/// * `Ok(String)` - The verbose log text
/// * `Err(SvnLogError::Svn)` - The command failed
pub fn verbose_log<P: AsRef<Path>>(cwd: P, target: Option<&str>) -> Result<String> {
    let output = run_svn(cwd, &log_args(target))?;
    Ok(output.stdout)
}
