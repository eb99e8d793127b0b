//! # Requirements Collector
//!
//! Asks the four fixed questions in order and builds a [`RequirementSet`].
//!
//! Only the first answer is mandatory. An empty (or whitespace-only) business problem
//! ends the session: `collect` returns `Ok(None)` and nothing else is asked. The other
//! three answers fall back to fixed defaults when left blank. No answer is validated;
//! the approval level count in particular is stored exactly as typed.
//!
//! Every answer, after defaults are applied, is appended to the session's
//! [`ConversationLog`] under its [`QuestionTag`].

use crate::error::Result;
use crate::model::{ConversationLog, QuestionTag, RequirementSet};
use crate::prompt::Prompter;
use std::io::{BufRead, Write};
use tracing::debug;

pub const DEFAULT_PAIN_POINT: &str = "Manual approval tracking";
pub const DEFAULT_APPROVAL_LEVELS: &str = "2";
pub const DEFAULT_COMPLIANCE: &str = "Standard corporate policy";

const RULE_WIDTH: usize = 70;

struct Question {
    tag: QuestionTag,
    text: &'static str,
    hint: &'static str,
    prompt: &'static str,
    default: Option<&'static str>,
}

const QUESTIONS: [Question; 4] = [
    Question {
        tag: QuestionTag::Problem,
        text: "Question 1: What business problem are you solving?",
        hint: "(For this demo, describe an expense approval challenge)",
        prompt: "Your answer: ",
        default: None,
    },
    Question {
        tag: QuestionTag::PainPoint,
        text: "Question 2: What's the most frustrating part of your current process?",
        hint: "(e.g., delays in approvals, lack of visibility, manual tracking)",
        prompt: "Your answer: ",
        default: Some(DEFAULT_PAIN_POINT),
    },
    Question {
        tag: QuestionTag::ApprovalLevels,
        text: "Question 3: How many approval levels do you need?",
        hint: "(e.g., 1 for manager only, 2 for manager + director, etc.)",
        prompt: "Your answer: ",
        default: Some(DEFAULT_APPROVAL_LEVELS),
    },
    Question {
        tag: QuestionTag::Compliance,
        text: "Question 4: Any specific compliance or policy requirements?",
        hint: "(e.g., SOX compliance, spending limits, cost center tracking)",
        prompt: "Your answer (or press Enter to skip): ",
        default: Some(DEFAULT_COMPLIANCE),
    },
];

pub struct RequirementsCollector;

impl RequirementsCollector {
    pub fn collect<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        log: &mut ConversationLog,
    ) -> Result<Option<RequirementSet>> {
        prompter.say("Let's understand your business need.\n")?;

        let mut answers: [String; 4] = Default::default();
        for (i, question) in QUESTIONS.iter().enumerate() {
            if i > 0 {
                prompter.say("")?;
            }
            prompter.say(question.text)?;
            prompter.say(&format!("{}\n", question.hint))?;

            let raw = prompter.ask(question.prompt)?;
            let answer = match (raw.is_empty(), question.default) {
                (false, _) => raw,
                (true, Some(default)) => default.to_string(),
                (true, None) => {
                    debug!(tag = %question.tag, "mandatory answer left empty, aborting");
                    prompter.say("\nDemo cancelled. Enterprise version includes guided prompts.")?;
                    return Ok(None);
                }
            };

            debug!(tag = %question.tag, answer = %answer, "answer recorded");
            log.record(question.tag, answer.clone());
            answers[i] = answer;
        }

        let [business_problem, pain_point, approval_levels, compliance] = answers;
        let requirements = RequirementSet {
            business_problem,
            pain_point,
            approval_levels,
            compliance,
        };

        echo_requirements(prompter, &requirements)?;
        Ok(Some(requirements))
    }
}

fn echo_requirements<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    requirements: &RequirementSet,
) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    prompter.say(&format!("\n{}", rule))?;
    prompter.say("  Requirements Gathered")?;
    prompter.say(&rule)?;
    prompter.say(&format!(
        "\nBusiness Problem: {}",
        requirements.business_problem
    ))?;
    prompter.say(&format!("Pain Point: {}", requirements.pain_point))?;
    prompter.say(&format!("Approval Levels: {}", requirements.approval_levels))?;
    prompter.say(&format!("Compliance: {}", requirements.compliance))?;

    prompter.say("\nEnterprise version includes:")?;
    prompter.say("  • Intelligent pattern detection across all business domains")?;
    prompter.say("  • Adaptive questioning based on industry and context")?;
    prompter.say("  • Integration discovery and feasibility analysis")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrchestratorError;
    use std::io::{Cursor, ErrorKind};

    fn run(input: &str) -> (Option<RequirementSet>, ConversationLog, String) {
        let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        let mut log = ConversationLog::new();
        let result = RequirementsCollector::collect(&mut prompter, &mut log).unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (result, log, output)
    }

    #[test]
    fn test_defaults_fill_blank_answers() {
        let (result, _, _) = run("Approvals take too long\n\n3\n\n");
        assert_eq!(
            result,
            Some(RequirementSet {
                business_problem: "Approvals take too long".into(),
                pain_point: "Manual approval tracking".into(),
                approval_levels: "3".into(),
                compliance: "Standard corporate policy".into(),
            })
        );
    }

    #[test]
    fn test_all_defaults() {
        let (result, _, _) = run("Slow reimbursements\n   \n\n\t\n");
        let requirements = result.unwrap();
        assert_eq!(requirements.pain_point, DEFAULT_PAIN_POINT);
        assert_eq!(requirements.approval_levels, DEFAULT_APPROVAL_LEVELS);
        assert_eq!(requirements.compliance, DEFAULT_COMPLIANCE);
    }

    #[test]
    fn test_supplied_answers_are_kept_trimmed() {
        let (result, _, _) = run("  Problem  \n  No visibility \n three or four \n SOX \n");
        let requirements = result.unwrap();
        assert_eq!(requirements.business_problem, "Problem");
        assert_eq!(requirements.pain_point, "No visibility");
        assert_eq!(requirements.approval_levels, "three or four");
        assert_eq!(requirements.compliance, "SOX");
    }

    #[test]
    fn test_empty_first_answer_aborts() {
        let (result, log, output) = run("\nunused\n2\nSOX\n");
        assert!(result.is_none());
        assert!(log.is_empty());
        assert!(output.contains("Demo cancelled"));
        assert!(!output.contains("Question 2"));
    }

    #[test]
    fn test_whitespace_first_answer_aborts() {
        let (result, _, _) = run("   \t \n");
        assert!(result.is_none());
    }

    #[test]
    fn test_end_of_input_fails() {
        let mut prompter = Prompter::new(Cursor::new(String::new()), Vec::new());
        let mut log = ConversationLog::new();
        let err = RequirementsCollector::collect(&mut prompter, &mut log)
            .err()
            .unwrap();
        assert!(matches!(err, OrchestratorError::Io(ref e) if e.kind() == ErrorKind::UnexpectedEof));
        assert!(log.is_empty());
    }

    #[test]
    fn test_truncated_input_fails_instead_of_defaulting() {
        let mut prompter = Prompter::new(Cursor::new("Only a problem\n".to_string()), Vec::new());
        let mut log = ConversationLog::new();
        let result = RequirementsCollector::collect(&mut prompter, &mut log);
        assert!(matches!(result, Err(OrchestratorError::Io(_))));
        assert_eq!(log.len(), 1);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(!output.contains("Requirements Gathered"));
    }

    #[test]
    fn test_log_records_answers_in_order() {
        let (_, log, _) = run("Problem\n\n5\nSpending limits\n");
        let tags: Vec<_> = log.entries().iter().map(|e| e.tag).collect();
        assert_eq!(
            tags,
            vec![
                QuestionTag::Problem,
                QuestionTag::PainPoint,
                QuestionTag::ApprovalLevels,
                QuestionTag::Compliance,
            ]
        );
        assert_eq!(log.entries()[1].text, DEFAULT_PAIN_POINT);
        assert_eq!(log.entries()[2].text, "5");
    }

    #[test]
    fn test_echoes_requirements() {
        let (_, _, output) = run("Receipts get lost\n\n\n\n");
        assert!(output.contains("Requirements Gathered"));
        assert!(output.contains("Business Problem: Receipts get lost"));
        assert!(output.contains("Pain Point: Manual approval tracking"));
        assert!(output.contains("Approval Levels: 2"));
        assert!(output.contains("Compliance: Standard corporate policy"));
        assert!(output.contains("Your answer (or press Enter to skip): "));
    }
}
