use serde::Serialize;
use updahd_core::Feedback;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::ui;

/// Print `response`, then turn error feedback into a failing exit.
///
/// The response is printed either way so partial results (a class change
/// whose history entry failed) stay visible.
pub fn finish<T: Serialize>(
    response: &T,
    feedback: &Feedback,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(response, flags.format)?;
    if let Some(line) = ui::banner(feedback) {
        eprintln!("{line}");
    }
    if feedback.is_success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("{}", feedback.text))
    }
}
