//! Model-driven app configuration for the expense approval solution.

use serde::{Deserialize, Serialize};

pub const EXPENSE_ENTITY: &str = "cr_expenserequest";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDefinition {
    pub name: String,
    pub unique_name: String,
    #[serde(rename = "type")]
    pub app_type: String,
    pub description: String,
    pub tables: Vec<TableDefinition>,
    pub flows: Vec<FlowDefinition>,
    pub security_roles: Vec<String>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    pub logical_name: String,
    pub display_name: String,
    pub attributes: Vec<AttributeDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    Money,
    OptionSet,
    Memo,
    Lookup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl AttributeDefinition {
    fn required(name: &str, attribute_type: AttributeType) -> Self {
        Self {
            name: name.to_string(),
            attribute_type,
            required: Some(true),
            target: None,
        }
    }

    fn lookup(name: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute_type: AttributeType::Lookup,
            required: None,
            target: Some(target.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub flow_type: String,
    pub trigger: String,
}

pub fn role_names() -> Vec<String> {
    ["Expense Admin", "Expense Approver", "Expense Submitter"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn build() -> AppDefinition {
    AppDefinition {
        name: "Expense Approval System".into(),
        unique_name: "expense_approval".into(),
        app_type: "ModelDriven".into(),
        description: "Enterprise expense approval workflow with governance".into(),
        tables: vec![TableDefinition {
            logical_name: EXPENSE_ENTITY.into(),
            display_name: "Expense Request".into(),
            attributes: vec![
                AttributeDefinition::required("cr_amount", AttributeType::Money),
                AttributeDefinition::required("cr_category", AttributeType::OptionSet),
                AttributeDefinition::required("cr_justification", AttributeType::Memo),
                AttributeDefinition::required("cr_status", AttributeType::OptionSet),
                AttributeDefinition::lookup("cr_approver", "systemuser"),
            ],
        }],
        flows: vec![FlowDefinition {
            name: "Expense Approval Workflow".into(),
            flow_type: "automated".into(),
            trigger: "Dataverse - When row is added or modified".into(),
        }],
        security_roles: role_names(),
        note: "Enterprise version includes advanced routing, policy engines, and analytics"
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_top_level_keys_in_order() {
        let json = serde_json::to_string(&build()).unwrap();
        let keys = [
            "\"name\"",
            "\"uniqueName\"",
            "\"type\"",
            "\"description\"",
            "\"tables\"",
            "\"flows\"",
            "\"securityRoles\"",
            "\"note\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_attributes() {
        let value = serde_json::to_value(build()).unwrap();
        let attributes = value["tables"][0]["attributes"].as_array().unwrap();
        assert_eq!(attributes.len(), 5);

        assert_eq!(attributes[0]["name"], "cr_amount");
        assert_eq!(attributes[0]["type"], "Money");
        assert_eq!(attributes[0]["required"], true);
        assert_eq!(attributes[1]["type"], "OptionSet");
        assert_eq!(attributes[2]["type"], "Memo");

        let approver = &attributes[4];
        assert_eq!(approver["type"], "Lookup");
        assert_eq!(approver["target"], "systemuser");
        assert_eq!(approver.get("required"), None::<&Value>);
    }

    #[test]
    fn test_flow_and_roles() {
        let value = serde_json::to_value(build()).unwrap();
        assert_eq!(value["flows"].as_array().unwrap().len(), 1);
        assert_eq!(value["flows"][0]["type"], "automated");
        assert_eq!(
            value["securityRoles"],
            serde_json::json!(["Expense Admin", "Expense Approver", "Expense Submitter"])
        );
    }
}
