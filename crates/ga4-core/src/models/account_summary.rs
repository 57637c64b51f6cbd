//! Google Analytics account summaries returned by the backend API

use serde::{Deserialize, Serialize};

/// One Google Analytics account and the properties the service account can read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Resource name, `accountSummaries/<number>`
    pub name: String,
    /// Account resource name, `accounts/<number>`
    pub account: String,
    pub display_name: String,
    #[serde(default)]
    pub property_summaries: Vec<PropertySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    /// Property resource name, `properties/<number>`
    pub property: String,
    pub display_name: String,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
}

/// A selectable property, labelled with its owning account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyOption {
    pub property_id: String,
    pub label: String,
}

/// Flatten account summaries into property choices, in API order.
pub fn property_options(summaries: &[AccountSummary]) -> Vec<PropertyOption> {
    summaries
        .iter()
        .flat_map(|summary| {
            summary
                .property_summaries
                .iter()
                .map(move |property| PropertyOption {
                    property_id: property.property.clone(),
                    label: format!("{} / {}", summary.display_name, property.display_name),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn summaries_parse_admin_api_shape() {
        let payload = r#"
        [
          {
            "name": "accountSummaries/1",
            "account": "accounts/1",
            "displayName": "Marketing",
            "propertySummaries": [
              {
                "property": "properties/1234",
                "displayName": "Website",
                "propertyType": "PROPERTY_TYPE_ORDINARY",
                "parent": "accounts/1"
              }
            ]
          },
          {
            "name": "accountSummaries/2",
            "account": "accounts/2",
            "displayName": "Empty"
          }
        ]
        "#;
        let summaries: Vec<AccountSummary> = serde_json::from_str(payload).unwrap();
        assert_eq!(summaries.len(), 2);
        assert!(summaries[1].property_summaries.is_empty());
        assert_eq!(
            summaries[0].property_summaries[0].property_type.as_deref(),
            Some("PROPERTY_TYPE_ORDINARY")
        );
    }

    #[test]
    fn property_options_label_with_account_name() {
        let summaries = vec![AccountSummary {
            name: "accountSummaries/1".to_string(),
            account: "accounts/1".to_string(),
            display_name: "Marketing".to_string(),
            property_summaries: vec![
                PropertySummary {
                    property: "properties/1".to_string(),
                    display_name: "Website".to_string(),
                    property_type: None,
                    parent: None,
                },
                PropertySummary {
                    property: "properties/2".to_string(),
                    display_name: "App".to_string(),
                    property_type: None,
                    parent: None,
                },
            ],
        }];
        assert_eq!(
            property_options(&summaries),
            vec![
                PropertyOption {
                    property_id: "properties/1".to_string(),
                    label: "Marketing / Website".to_string(),
                },
                PropertyOption {
                    property_id: "properties/2".to_string(),
                    label: "Marketing / App".to_string(),
                },
            ]
        );
    }
}
