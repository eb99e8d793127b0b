//! The interactive flow, driven step by step through a [`Session`].
//!
//! ```text
//! banner → "Proceed?" ─ not y ─▶ "Demo cancelled." (exit)
//!                      └─ y ──▶ welcome → questions ─ empty problem ─▶ closing
//!                                                  └─ answered ──▶ generate → summary → closing
//! ```

use super::render::{
    print_status, render_banner, render_closing, render_generated, render_generating,
    render_patterns, render_welcome, Status,
};
use super::setup::Cli;
use orchestrator::config::OrchestratorConfig;
use orchestrator::error::Result;
use orchestrator::patterns::PatternRegistry;
use orchestrator::prompt::Prompter;
use orchestrator::session::{Session, SessionState};

const CONFIRM_PROMPT: &str = "\nProceed with demonstration? (y/n): ";

pub fn run(cli: &Cli, config: OrchestratorConfig) -> Result<()> {
    if cli.list_patterns {
        print!("{}", render_patterns(&PatternRegistry::builtin())?);
        return Ok(());
    }

    print!("{}", render_banner()?);

    let mut prompter = Prompter::stdio();
    let answer = prompter.ask(CONFIRM_PROMPT)?;

    let mut session = Session::new(config);
    if *session.confirm(&answer)? == SessionState::Cancelled {
        print_status(Status::Notice, "\nDemo cancelled. Thank you for your interest.");
        return Ok(());
    }

    print!("{}", render_welcome()?);
    let collected = matches!(
        session.collect(&mut prompter)?,
        SessionState::Collected(_)
    );

    if collected {
        print!("{}", render_generating()?);
        if let SessionState::Generated(solution) = session.generate()? {
            print!("{}", render_generated(solution)?);
        }
    }

    print!("{}", render_closing()?);
    Ok(())
}
