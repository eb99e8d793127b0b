//! # Power Platform Solutions Orchestrator
//!
//! A guided demonstration that asks a handful of questions about an approval process and
//! generates a starter Power Platform solution for it: an app definition, a governance
//! report and a set of security roles.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, banners, styled summaries, logging setup          │
//! │  - Interrupt handler and the outer fault boundary           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Start → Confirmed → Collected → Generated                │
//! │  - Owns the conversation log and the pattern registry       │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Collector (collector.rs)     │ │  Patterns (patterns/)     │
//! │  - Four questions, defaults   │ │  - SolutionGenerator      │
//! │  - Reads through a Prompter   │ │  - Artifact builders      │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! The library never touches the process's stdin/stdout directly: all interaction goes
//! through a [`prompt::Prompter`], which the binary binds to the terminal and the tests
//! bind to in-memory buffers. Filesystem output is confined to the generator, which
//! writes under the configured output root.
//!
//! ## Module Overview
//!
//! - [`session`]: The run's state machine
//! - [`collector`]: Requirements gathering
//! - [`patterns`]: Pattern registry and generators
//! - [`prompt`]: Line-oriented question/answer I/O
//! - [`model`]: Core data types (`RequirementSet`, `GeneratedSolution`, `PatternId`)
//! - [`config`]: Runtime settings
//! - [`error`]: Error types

pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod patterns;
pub mod prompt;
pub mod session;
