//! Role-based access control definitions for the expense request entity.

use super::app_definition::EXPENSE_ENTITY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dataverse privilege depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    None,
    User,
    BusinessUnit,
    Organization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privileges {
    pub create: AccessLevel,
    pub read: AccessLevel,
    pub write: AccessLevel,
    pub delete: AccessLevel,
    pub assign: AccessLevel,
    pub share: AccessLevel,
}

impl Privileges {
    fn uniform(level: AccessLevel) -> Self {
        Self {
            create: level,
            read: level,
            write: level,
            delete: level,
            assign: level,
            share: level,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRole {
    pub name: String,
    pub description: String,
    pub privileges: BTreeMap<String, Privileges>,
    pub audit_enabled: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub mfa_required: bool,
}

impl SecurityRole {
    fn new(name: &str, description: &str, privileges: Privileges) -> Self {
        let mut by_entity = BTreeMap::new();
        by_entity.insert(EXPENSE_ENTITY.to_string(), privileges);
        Self {
            name: name.to_string(),
            description: description.to_string(),
            privileges: by_entity,
            audit_enabled: true,
            mfa_required: false,
        }
    }

    fn with_mfa(mut self) -> Self {
        self.mfa_required = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRoles {
    pub roles: Vec<SecurityRole>,
    pub note: String,
}

pub fn build() -> SecurityRoles {
    use AccessLevel::*;

    let admin = SecurityRole::new(
        "Expense Admin",
        "Full administrative access to expense system",
        Privileges::uniform(Organization),
    );
    let approver = SecurityRole::new(
        "Expense Approver",
        "Can approve expense requests within scope",
        Privileges {
            create: None,
            read: BusinessUnit,
            write: BusinessUnit,
            delete: None,
            assign: BusinessUnit,
            share: None,
        },
    )
    .with_mfa();
    let submitter = SecurityRole::new(
        "Expense Submitter",
        "Can submit and track own expense requests",
        Privileges {
            create: User,
            read: User,
            write: User,
            delete: User,
            assign: None,
            share: None,
        },
    );

    SecurityRoles {
        roles: vec![admin, approver, submitter],
        note: "Enterprise version includes advanced role hierarchies and dynamic security groups"
            .into(),
    }
}
