//! Rough spend estimate for a translation run.

use serde::Serialize;

const CHARS_PER_TOKEN: f64 = 4.0;
/// Prompt text wrapped around every source string.
const PROMPT_OVERHEAD_CHARS: f64 = 200.0;
const INPUT_COST_PER_1K: f64 = 0.03;
const OUTPUT_COST_PER_1K: f64 = 0.06;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub text_count: usize,
    pub avg_text_length: usize,
    pub input_tokens: f64,
    pub output_tokens: f64,
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
    pub cost_per_translation: f64,
}

/// Estimate tokens and USD cost for `text_count` texts of average length
/// `avg_text_length` characters.
pub fn estimate_cost(text_count: usize, avg_text_length: usize) -> CostEstimate {
    let count = text_count as f64;
    let avg = avg_text_length as f64;
    let input_tokens = count * (avg + PROMPT_OVERHEAD_CHARS) / CHARS_PER_TOKEN;
    let output_tokens = count * avg / CHARS_PER_TOKEN;
    let input_cost = input_tokens / 1000.0 * INPUT_COST_PER_1K;
    let output_cost = output_tokens / 1000.0 * OUTPUT_COST_PER_1K;
    let total_cost = input_cost + output_cost;

    CostEstimate {
        text_count,
        avg_text_length,
        input_tokens,
        output_tokens,
        input_cost,
        output_cost,
        total_cost,
        cost_per_translation: if text_count == 0 { 0.0 } else { total_cost / count },
    }
}

/// Estimate for a concrete set of texts, using their mean character length.
pub fn estimate_for_texts<S: AsRef<str>>(texts: &[S]) -> CostEstimate {
    let characters: usize = texts.iter().map(|t| t.as_ref().chars().count()).sum();
    let avg = characters.checked_div(texts.len()).unwrap_or(0);
    estimate_cost(texts.len(), avg)
}
