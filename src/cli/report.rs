//! Report formatting and printing utilities.
//!
//! Findings are printed cargo-style; tables are aligned by display width so
//! CJK and accented text line up.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issues::{Finding, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Widest a table cell may get before it is truncated.
const MAX_CELL_WIDTH: usize = 48;

/// Print findings to stdout, errors first.
pub fn report(findings: &[Finding], file: &str) {
    report_to(findings, file, &mut io::stdout().lock());
}

pub fn report_to<W: Write>(findings: &[Finding], file: &str, writer: &mut W) {
    if findings.is_empty() {
        return;
    }

    let mut sorted = findings.to_vec();
    sorted.sort_by(|a, b| a.severity.cmp(&b.severity));

    for finding in &sorted {
        print_finding(finding, file, writer);
    }

    print_summary(&sorted, writer);
}

pub fn print_success(message: &str) {
    print_success_to(message, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

pub fn print_failure(message: &str) {
    let _ = writeln!(io::stdout().lock(), "{} {}", FAILURE_MARK.red(), message.red());
}

pub fn print_warning(message: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "warning:".bold().yellow(), message);
}

/// Print `name  count` lines under a bold heading.
pub fn print_counts<W: Write>(title: &str, counts: &BTreeMap<String, usize>, writer: &mut W) {
    let _ = writeln!(writer, "{}", title.bold());
    let width = counts.keys().map(|k| k.width()).max().unwrap_or(0);
    for (name, count) in counts {
        let _ = writeln!(writer, "  {}  {}", pad(name, width), count);
    }
}

/// Print rows as left-aligned columns separated by two spaces.
pub fn print_table<W: Write>(headers: &[&str], rows: &[Vec<String>], writer: &mut W) {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| fit(c, MAX_CELL_WIDTH)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.width())
                .chain(std::iter::once(h.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(writer, "{}", header.trim_end().bold());

    for row in &cells {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(writer, "{}", line.trim_end());
    }
}

fn print_finding<W: Write>(finding: &Finding, file: &str, writer: &mut W) {
    let severity = match finding.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        finding.message,
        finding.rule.to_string().dimmed().cyan()
    );

    match &finding.key {
        Some(key) => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), file);
            let _ = writeln!(writer, "  {} {} {}", "=".blue(), "key:".bold(), key);
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), file);
        }
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(findings: &[Finding], writer: &mut W) {
    let errors = findings.iter().filter(|f| f.severity == Severity::Error).count();
    let warnings = findings.len() - errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        findings.len(),
        errors,
        if errors == 1 { "error" } else { "errors" }.red(),
        warnings,
        if warnings == 1 { "warning" } else { "warnings" }.yellow()
    );
}

/// Left-align `text` to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
fn fit(text: &str, max: usize) -> String {
    let text = text.replace('\n', " ");
    if text.width() <= max {
        return text;
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
