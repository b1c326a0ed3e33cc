//! External command execution
//!
//! Every git invocation goes through [`run`] so commands and their timing
//! show up in the debug log (`RUST_LOG=debug gbranch`).

use std::process::{Command, Output};
use std::time::Instant;

/// Execute a command with timing and debug logging.
///
/// ```text
/// $ git branch -vv
/// [gbranch-trace] cmd="git branch -vv" dur=4.1ms ok=true
/// ```
pub fn run(cmd: &mut Command) -> std::io::Result<Output> {
    let cmd_str = command_string(cmd);
    log::debug!("$ {}", cmd_str);

    let t0 = Instant::now();
    let result = cmd.output();
    let duration_ms = t0.elapsed().as_secs_f64() * 1000.0;

    match &result {
        Ok(output) => log::debug!(
            "[gbranch-trace] cmd=\"{}\" dur={:.1}ms ok={}",
            cmd_str,
            duration_ms,
            output.status.success()
        ),
        Err(e) => log::debug!(
            "[gbranch-trace] cmd=\"{}\" dur={:.1}ms err=\"{}\"",
            cmd_str,
            duration_ms,
            e
        ),
    }

    result
}

/// Render a command as it would be typed, for logs and error messages.
pub fn command_string(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
