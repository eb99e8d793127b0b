use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identifier of a pre-built solution pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternId {
    ExpenseApproval,
    AssetTracking,
    DataCollection,
    ExternalIntegration,
    AnalyticsDashboards,
}

impl PatternId {
    pub const ALL: [PatternId; 5] = [
        PatternId::ExpenseApproval,
        PatternId::AssetTracking,
        PatternId::DataCollection,
        PatternId::ExternalIntegration,
        PatternId::AnalyticsDashboards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternId::ExpenseApproval => "expense_approval",
            PatternId::AssetTracking => "asset_tracking",
            PatternId::DataCollection => "data_collection",
            PatternId::ExternalIntegration => "external_integration",
            PatternId::AnalyticsDashboards => "analytics_dashboards",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PatternId::ExpenseApproval => "Expense approval workflow",
            PatternId::AssetTracking => "Asset tracking with mobile barcode scanning",
            PatternId::DataCollection => "Data collection forms with business process flows",
            PatternId::ExternalIntegration => "External system integration with Virtual Tables",
            PatternId::AnalyticsDashboards => "Analytics dashboards with embedded Power BI",
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The answers gathered by the collector. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    pub business_problem: String,
    pub pain_point: String,
    /// Free text; never parsed as a number.
    pub approval_levels: String,
    pub compliance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTag {
    Problem,
    PainPoint,
    ApprovalLevels,
    Compliance,
}

impl QuestionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionTag::Problem => "problem",
            QuestionTag::PainPoint => "pain_point",
            QuestionTag::ApprovalLevels => "approval_levels",
            QuestionTag::Compliance => "compliance",
        }
    }
}

impl fmt::Display for QuestionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub tag: QuestionTag,
    pub text: String,
}

/// Ordered record of every answer given during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tag: QuestionTag, text: impl Into<String>) {
        self.entries.push(ConversationEntry {
            tag,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a generator produced: the solution name, its directory and the files inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSolution {
    pub name: String,
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: PatternId,
    pub files: Vec<String>,
}
