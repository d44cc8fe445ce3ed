use anyhow::{Context, Result};

use super::super::{args::CheckCommand, exit_status::ExitStatus, report};
use crate::{core::check_file, issues::structure_findings};

/// Validate the structure of one localization export.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let path = &cmd.file.file;
    let structure = check_file(path).with_context(|| format!("Failed to check {}", path.display()))?;

    let findings = structure_findings(&structure);
    if findings.is_empty() {
        report::print_success(&format!("{}: structure is valid", path.display()));
    } else {
        report::report(&findings, &path.display().to_string());
    }
    Ok(ExitStatus::from_findings(!findings.is_empty()))
}
