use anyhow::Result;
use colored::Colorize;

use super::{
    super::{args::EstimateCommand, exit_status::ExitStatus},
    helper::{SelectionOptions, load_or_report, load_workspace_config, select_keys},
};
use crate::translation::estimate_for_texts;

/// Print the expected backend spend for translating every eligible entry once.
pub fn estimate(cmd: EstimateCommand) -> Result<ExitStatus> {
    let path = &cmd.file.file;
    let Some(file) = load_or_report(path)? else {
        return Ok(ExitStatus::Failure);
    };
    let config = load_workspace_config()?.config;

    let selection = select_keys(
        &file,
        &SelectionOptions {
            only_keys: &[],
            exclude_global_variables: config.exclude_global_variables,
            is_ignored: &|key| config.is_ignored_key(key),
            skip_translated: None,
        },
    );
    let texts: Vec<&str> = selection
        .keys
        .iter()
        .filter_map(|key| file.records.get(key))
        .map(|record| record.text.as_str())
        .collect();
    let estimate = estimate_for_texts(&texts);

    println!("{}", "Cost estimate".bold());
    println!("  Texts:          {}", estimate.text_count);
    println!("  Avg length:     {} chars", estimate.avg_text_length);
    println!("  Input tokens:   {:.0}", estimate.input_tokens);
    println!("  Output tokens:  {:.0}", estimate.output_tokens);
    println!("  Input cost:     ${:.4}", estimate.input_cost);
    println!("  Output cost:    ${:.4}", estimate.output_cost);
    println!("  Total cost:     ${:.4}", estimate.total_cost);
    println!("  Per text:       ${:.4}", estimate.cost_per_translation);

    Ok(ExitStatus::Success)
}
