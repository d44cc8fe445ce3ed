use anyhow::Result;
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use crate::translation::{DEFAULT_STYLE, SUPPORTED_LANGUAGES, translation_styles};

pub fn languages() -> Result<ExitStatus> {
    for language in SUPPORTED_LANGUAGES {
        println!("{}", language);
    }
    Ok(ExitStatus::Success)
}

pub fn styles() -> Result<ExitStatus> {
    let styles = translation_styles();
    let width = styles.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, description) in styles {
        let marker = if name == DEFAULT_STYLE { " (default)" } else { "" };
        let name = format!("{:<width$}", name, width = width);
        println!("{}  {}{}", name.bold(), description, marker.dimmed());
    }
    Ok(ExitStatus::Success)
}
