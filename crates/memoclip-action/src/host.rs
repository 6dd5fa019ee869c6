//! Host boundary: the only place submission results become user-visible.

use std::io::Write;

use memoclip_core::{Host, SubmissionConfig, SubmissionError, SubmissionOutcome, SubmitAction};

/// Message shown after a memo was saved.
pub fn success_message(outcome: &SubmissionOutcome) -> String {
    match outcome.tag_count() {
        0 => "✅ Saved to Memos".to_string(),
        1 => "✅ Saved to Memos (1 tag)".to_string(),
        n => format!("✅ Saved to Memos ({} tags)", n),
    }
}

/// Message shown when saving failed.
pub fn failure_message(err: &SubmissionError) -> String {
    format!("❌ Save failed: {}", err)
}

/// Run `action` for `input` and report the result through `host`.
///
/// The result is also returned so hosts with an exit status can use it.
pub async fn run_action(
    host: &dyn Host,
    action: &dyn SubmitAction,
    input: &str,
    config: &SubmissionConfig,
) -> Result<SubmissionOutcome, SubmissionError> {
    let result = action.submit(input, config).await;

    match &result {
        Ok(outcome) => {
            host.show_text(&success_message(outcome));
            host.show_success();
        }
        Err(e) => host.show_text(&failure_message(e)),
    }

    result
}

/// Host writing status messages to standard output.
///
/// Success is signalled by the process exit status, so `show_success` only
/// flushes.
#[derive(Debug, Default)]
pub struct ConsoleHost;

impl Host for ConsoleHost {
    fn show_text(&self, text: &str) {
        println!("{}", text);
    }

    fn show_success(&self) {
        let _ = std::io::stdout().flush();
    }
}
