use std::path::Path;
use std::process::Command;

use log::debug;

use crate::defaults::GIT_LOG_FORMAT;
use crate::error::Error;

/// Read the author line of every commit reachable from `HEAD`.
///
/// This uses the system git command, so `.mailmap` and any repository
/// configuration apply. Output is one `Name <email>` line per commit, in
/// `git log` order. Only the primary author of each commit is reported.
pub fn log_authors(cwd: &Path) -> Result<String, Error> {
    let format = format!("--format={}", GIT_LOG_FORMAT);
    let command = format!("git log {}", format);
    debug!("running `{}` in {}", command, cwd.display());

    let output = Command::new("git")
        .arg("log")
        .arg(&format)
        .current_dir(cwd)
        .output()
        .map_err(|e| Error::GitCommand {
            command: command.clone(),
            cwd: cwd.to_path_buf(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitCommand {
            command,
            cwd: cwd.to_path_buf(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
