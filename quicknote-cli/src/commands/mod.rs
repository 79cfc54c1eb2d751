pub mod folders;
pub mod new;
pub mod registered;
pub mod run;
pub mod settings;

use std::process::ExitCode;

use quicknote_core::CreateOutcome;

/// Process exit status for a creation attempt; details were already shown.
pub(crate) fn exit_code(outcome: &CreateOutcome) -> ExitCode {
    if outcome.is_created() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
