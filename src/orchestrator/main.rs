//! # pp-orchestrator
//!
//! The binary is intentionally thin: everything user-facing lives in `cli/`, and all
//! behavior (questions, state machine, artifact generation) lives in the `orchestrator`
//! library. This file only hands control to `cli::run()`.
//!
//! Exit status is 0 for every outcome the flow can reach, including cancellation,
//! interruption and runtime faults. Only argument errors, which are reported before the
//! flow starts, exit non-zero.

mod cli;

fn main() {
    cli::run();
}
