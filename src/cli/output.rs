//! Output formatting utilities for the CLI.

use serde::Serialize;

/// Command result that can render for people or as JSON.
pub trait CommandOutput: Serialize {
    /// Plain-text rendering for terminal output.
    fn to_human(&self) -> String;

    /// JSON rendering used with `--json`.
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print `result` to stdout in the selected mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}
