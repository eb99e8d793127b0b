//! # Solution Patterns
//!
//! A pattern is a pre-built solution template. Each implemented pattern provides a
//! [`SolutionGenerator`]; the [`PatternRegistry`] maps every known [`PatternId`] to either
//! an available generator or an explicit [`PatternSlot::Unavailable`] marker.
//!
//! Only `expense_approval` ships a generator. The others are listed so the registry can
//! report them, but they can never be selected for generation.

use crate::error::{OrchestratorError, Result};
use crate::model::{GeneratedSolution, PatternId, RequirementSet};
use chrono::{DateTime, Local};
use std::path::Path;

pub mod expense_approval;

pub use expense_approval::ExpenseApprovalGenerator;

/// Builds a solution's artifacts under `output_root`.
pub trait SolutionGenerator {
    fn pattern(&self) -> PatternId;

    /// Generates the solution as if the clock read `now`.
    fn generate_at(
        &self,
        requirements: &RequirementSet,
        output_root: &Path,
        now: DateTime<Local>,
    ) -> Result<GeneratedSolution>;

    fn generate(
        &self,
        requirements: &RequirementSet,
        output_root: &Path,
    ) -> Result<GeneratedSolution> {
        self.generate_at(requirements, output_root, Local::now())
    }
}

pub enum PatternSlot {
    Available(Box<dyn SolutionGenerator>),
    Unavailable,
}

impl PatternSlot {
    pub fn is_available(&self) -> bool {
        matches!(self, PatternSlot::Available(_))
    }
}

pub struct PatternRegistry {
    slots: Vec<(PatternId, PatternSlot)>,
}

impl PatternRegistry {
    pub fn empty() -> Self {
        Self { slots: Vec::new() }
    }

    /// The registry shipped with this edition: expense approval plus placeholders.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for id in PatternId::ALL {
            let slot = match id {
                PatternId::ExpenseApproval => {
                    PatternSlot::Available(Box::new(ExpenseApprovalGenerator::new()))
                }
                _ => PatternSlot::Unavailable,
            };
            registry.register(id, slot);
        }
        registry
    }

    /// Registers `slot` under `id`, replacing any previous entry.
    pub fn register(&mut self, id: PatternId, slot: PatternSlot) {
        match self.slots.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = slot,
            None => self.slots.push((id, slot)),
        }
    }

    pub fn generator(&self, id: PatternId) -> Result<&dyn SolutionGenerator> {
        match self.slots.iter().find(|(existing, _)| *existing == id) {
            Some((_, PatternSlot::Available(generator))) => Ok(generator.as_ref()),
            _ => Err(OrchestratorError::PatternUnavailable(id)),
        }
    }

    /// Registered patterns in registration order, with their availability.
    pub fn entries(&self) -> impl Iterator<Item = (PatternId, bool)> + '_ {
        self.slots
            .iter()
            .map(|(id, slot)| (*id, slot.is_available()))
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lists_all_patterns_in_order() {
        let registry = PatternRegistry::builtin();
        let ids: Vec<_> = registry.entries().map(|(id, _)| id).collect();
        assert_eq!(ids, PatternId::ALL.to_vec());
    }

    #[test]
    fn test_only_expense_approval_is_available() {
        let registry = PatternRegistry::builtin();
        for (id, available) in registry.entries() {
            assert_eq!(available, id == PatternId::ExpenseApproval, "{}", id);
        }

        let generator = registry.generator(PatternId::ExpenseApproval).unwrap();
        assert_eq!(generator.pattern(), PatternId::ExpenseApproval);
    }

    #[test]
    fn test_placeholder_is_not_selectable() {
        let registry = PatternRegistry::builtin();
        let err = registry.generator(PatternId::AssetTracking).err().unwrap();
        assert!(matches!(
            err,
            OrchestratorError::PatternUnavailable(PatternId::AssetTracking)
        ));
    }

    #[test]
    fn test_unregistered_pattern_is_unavailable() {
        let registry = PatternRegistry::empty();
        assert!(registry.generator(PatternId::ExpenseApproval).is_err());
        assert_eq!(registry.entries().count(), 0);
    }

    #[test]
    fn test_register_replaces_existing_slot() {
        let mut registry = PatternRegistry::builtin();
        registry.register(PatternId::ExpenseApproval, PatternSlot::Unavailable);
        assert!(registry.generator(PatternId::ExpenseApproval).is_err());
        assert_eq!(registry.entries().count(), PatternId::ALL.len());
    }
}
