//! Process Crash Handling
//!
//! Last-resort reporting for failures that escape the build: panics from any
//! thread (rayon workers included) and errors returned to `main`. Both are
//! logged and end the process with [`CRASH_EXIT_CODE`]. Nothing is retried.

use std::backtrace::Backtrace;
use std::process;
use std::sync::Once;

use crate::error::BuildError;

/// Exit status used for every unrecoverable failure.
pub const CRASH_EXIT_CODE: i32 = 1;

static INSTALL: Once = Once::new();

/// Install the process-wide panic hook. Call once from `main`, after the
/// logger is set up; later calls are no-ops.
pub fn install_crash_handlers() {
    INSTALL.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let backtrace = Backtrace::force_capture();
            report(&format!("uncaught panic: {}\n{}", info, backtrace));
            process::exit(CRASH_EXIT_CODE);
        }));
    });
}

/// Log an error that reached the process boundary and exit.
pub fn exit_with_error(err: &anyhow::Error) -> ! {
    report(&describe(err));
    log::debug!("{:?}", err);
    process::exit(CRASH_EXIT_CODE)
}

/// One-line description of `err` and its causes, prefixed with the error
/// kind when it came from the build.
pub fn describe(err: &anyhow::Error) -> String {
    match err.chain().find_map(|cause| cause.downcast_ref::<BuildError>()) {
        Some(build) => format!("{:?} error: {:#}", build.kind(), err),
        None => format!("{:#}", err),
    }
}

fn report(message: &str) {
    if log::log_enabled!(log::Level::Error) {
        log::error!("{}", message);
    } else {
        eprintln!("[ERROR] {}", message);
    }
}
