//! Numbered text listing of scenarios.

use crate::scenario::Scenario;

/// Formats one line per scenario, numbered from 1 and zero padded to two
/// digits. With `long`, the subtitle follows the title after an em dash.
///
/// # Examples
///
/// ```
/// # use interactions::{listing::list_lines, scenario::{Model, generate}};
/// let lines = list_lines(&generate(Model::Basic), false);
/// assert_eq!(lines[0], "01. A & B: no direct link");
/// assert_eq!(lines[63], "64. A ↔ B (mutualism)");
/// ```
pub fn list_lines(scenarios: &[Scenario], long: bool) -> Vec<String> {
    scenarios
        .iter()
        .enumerate()
        .map(|(index, scenario)| {
            let number = index + 1;
            if long {
                format!("{number:02}. {} — {}", scenario.title(), scenario.subtitle())
            } else {
                format!("{number:02}. {}", scenario.title())
            }
        })
        .collect()
}
