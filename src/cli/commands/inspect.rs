use std::{fs, io};

use anyhow::{Context, Result};

use super::{
    super::{args::InspectCommand, exit_status::ExitStatus, report},
    helper::{load_or_report, load_workspace_config, translations_path},
};
use crate::core::{
    TranslationStore,
    index::{Filter, analyze, component_summary, topic_summary},
};

/// Classify a file, print summaries and the entries matching the filters.
pub fn inspect(cmd: InspectCommand) -> Result<ExitStatus> {
    let path = &cmd.file.file;
    let Some(file) = load_or_report(path)? else {
        return Ok(ExitStatus::Failure);
    };

    let config = load_workspace_config()?.config;
    let language = cmd.language.language.clone().unwrap_or(config.target_language);
    let store = if cmd.status.is_some() || cmd.language.translations.is_some() {
        TranslationStore::load(&translations_path(path, cmd.language.translations.as_deref()))?
    } else {
        TranslationStore::new()
    };

    let mut out = io::stdout().lock();
    report::print_counts(
        &format!("Topics ({} entries)", file.len()),
        &topic_summary(&file.records),
        &mut out,
    );
    report::print_counts("Components", &component_summary(&file.records), &mut out);

    let filter = Filter {
        query: cmd.search.clone(),
        topic: cmd.topic.clone(),
        component: cmd.component.clone(),
        status: cmd.status.map(Into::into),
    };
    let matching = filter.apply(&file.records, &store, &language);

    let rows: Vec<Vec<String>> = matching
        .iter()
        .take(cmd.limit)
        .map(|(key, record)| {
            vec![
                key.clone(),
                record.topic.clone(),
                record.ui_component.to_string(),
                record.text.clone(),
                store.status(key, &language).to_string(),
            ]
        })
        .collect();

    println!();
    report::print_table(&["Key", "Topic", "Component", "Text", "Status"], &rows, &mut out);
    if matching.len() > cmd.limit {
        println!("... and {} more (use --limit to show more)", matching.len() - cmd.limit);
    }

    if let Some(json_path) = &cmd.json {
        let analysis = serde_json::to_string_pretty(&analyze(&file.records))
            .context("Failed to serialize analysis")?;
        fs::write(json_path, format!("{}\n", analysis))
            .with_context(|| format!("Failed to write analysis: {}", json_path.display()))?;
        report::print_success(&format!("Analysis written to {}", json_path.display()));
    }

    Ok(ExitStatus::Success)
}
