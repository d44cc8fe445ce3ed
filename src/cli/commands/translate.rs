use std::{
    sync::{Arc, Mutex, PoisonError},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use super::{
    super::{args::TranslateCommand, exit_status::ExitStatus, report},
    helper::{
        SelectionOptions, load_or_report, load_workspace_config, output_path, select_keys,
        translations_path,
    },
};
use crate::{
    config::Credentials,
    core::{TranslationStore, export, write_json},
    translation::{
        Backend, BatchJob, BatchOptions, ProgressEvent, TranslationBackend, TranslationCache,
        Translator, is_error_sentinel, spawn_batch, style::find_style,
    },
};

/// How often the progress channel is drained.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn translate(cmd: TranslateCommand, verbose: bool) -> Result<ExitStatus> {
    let path = &cmd.file.file;
    let Some(file) = load_or_report(path)? else {
        return Ok(ExitStatus::Failure);
    };

    let loaded = load_workspace_config()?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = &loaded.config;

    let language = cmd.language.language.clone().unwrap_or_else(|| config.target_language.clone());
    let style = cmd.style.clone().unwrap_or_else(|| config.style.clone());
    if find_style(&style).is_none() {
        report::print_warning(&format!("Unknown style \"{}\", using formal guidance", style));
    }

    let store_path = translations_path(path, cmd.language.translations.as_deref());
    let store = TranslationStore::load(&store_path)?;

    let selection = select_keys(
        &file,
        &SelectionOptions {
            only_keys: &cmd.keys,
            exclude_global_variables: config.exclude_global_variables,
            is_ignored: &|key| config.is_ignored_key(key),
            skip_translated: (!cmd.force).then_some((&store, language.as_str())),
        },
    );
    for key in &selection.unknown {
        report::print_warning(&format!("Key not found in {}: {}", path.display(), key));
    }
    if verbose {
        eprintln!(
            "Skipped {} global variable(s), {} ignored, {} without text, {} already translated",
            selection.global_variables,
            selection.ignored,
            selection.non_text,
            selection.already_translated
        );
    }

    let backend = Backend::from_settings(Credentials::from(cmd.backend).resolve(&config.backend));
    if backend.is_offline() {
        report::print_warning("No Azure OpenAI credentials found, using mock translations");
    }
    let cache = Arc::new(TranslationCache::open(loaded.cache_path(&cwd)));
    let translator = Arc::new(Translator::new(backend, cache).with_retry_policy(config.retry_policy()));

    let jobs: Vec<BatchJob> = selection
        .keys
        .iter()
        .filter_map(|key| file.records.get(key).map(|record| (key, record)))
        .map(|(key, record)| BatchJob {
            key: key.clone(),
            text: record.text.clone(),
            context: record.translation_context().to_string(),
        })
        .collect();

    info!(jobs = jobs.len(), language = %language, style = %style, "Translating");
    let store = Arc::new(Mutex::new(store));
    let handle = spawn_batch(
        translator,
        jobs,
        BatchOptions {
            target_language: language.clone(),
            style,
            max_workers: cmd.workers.unwrap_or(config.max_workers),
        },
        store.clone(),
    )?;

    loop {
        let finished = handle.is_finished();
        for event in handle.drain() {
            if let ProgressEvent::Progress { done, total, key, translated } = event {
                let mark = if is_error_sentinel(&translated) {
                    report::FAILURE_MARK.red()
                } else {
                    report::SUCCESS_MARK.green()
                };
                eprintln!("{} [{}/{}] {}", mark, done, total, key);
            }
        }
        if finished {
            break;
        }
        thread::sleep(POLL_INTERVAL);
    }
    let summary = handle.join()?;

    let store = store.lock().unwrap_or_else(PoisonError::into_inner);
    store.save(&store_path)?;

    let output = output_path(path, &language, cmd.output.as_deref());
    write_json(&output, &export(&file.records, &store, &language))?;

    if summary.failed > 0 {
        report::print_failure(&format!(
            "{} of {} translation(s) failed; wrote {}",
            summary.failed,
            summary.total,
            output.display()
        ));
        return Ok(ExitStatus::Failure);
    }

    report::print_success(&format!(
        "Translated {} {} into {}; wrote {}",
        summary.translated,
        if summary.translated == 1 { "entry" } else { "entries" },
        language,
        output.display()
    ));
    Ok(ExitStatus::Success)
}
