use anyhow::Result;

use super::{
    super::{args::ValidateCommand, exit_status::ExitStatus, report},
    helper::{load_or_report, load_workspace_config, translations_path},
};
use crate::{
    core::TranslationStore,
    issues::{Finding, error_count, validation_findings},
    translation::validate_translation,
};

/// Score every stored translation of `FILE` in the target language.
pub fn validate(cmd: ValidateCommand) -> Result<ExitStatus> {
    let path = &cmd.file.file;
    let Some(file) = load_or_report(path)? else {
        return Ok(ExitStatus::Failure);
    };

    let language = match cmd.language.language.clone() {
        Some(language) => language,
        None => load_workspace_config()?.config.target_language,
    };
    let store_path = translations_path(path, cmd.language.translations.as_deref());
    let store = TranslationStore::load(&store_path)?;

    let mut findings: Vec<Finding> = Vec::new();
    let mut scores = Vec::new();
    for (key, record) in &file.records {
        let Some(translated) = store.get(key, &language) else {
            continue;
        };
        let result = validate_translation(&record.text, translated);
        scores.push(result.score);
        findings.extend(validation_findings(key, &result));
    }

    if scores.is_empty() {
        report::print_warning(&format!(
            "No {} translations found in {}",
            language,
            store_path.display()
        ));
        return Ok(ExitStatus::Success);
    }

    report::report(&findings, &path.display().to_string());

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let summary = format!(
        "Validated {} {} translation(s), mean score {:.2}",
        scores.len(),
        language,
        mean
    );
    let has_errors = error_count(&findings) > 0;
    if has_errors {
        report::print_failure(&summary);
    } else {
        report::print_success(&summary);
    }
    Ok(ExitStatus::from_findings(has_errors))
}
