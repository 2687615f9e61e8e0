use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::FormatItem;
use time::macros::format_description;
use uuid::Uuid;

pub const PLAN_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub body_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePlanRequest {
    pub plan_data: Option<Value>,
    pub user_details: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct PlanListItem {
    pub id: Uuid,
    pub name: String,
    pub date_created: String,
    pub data: Value,
}

/// Display name for a saved plan: capitalized body type from the snapshot
/// (absent or empty falls back to "Custom") plus the creation date.
pub fn plan_display_name(user_details: &Value, date_str: &str) -> String {
    let body_type = user_details
        .get("bodyType")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("Custom");
    format!("{} Plan - {}", capitalize(body_type), date_str)
}

/// First character uppercased, the rest lowered.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_name_capitalizes_the_body_type() {
        let details = json!({ "bodyType": "ectomorph", "age": 30 });
        assert_eq!(
            plan_display_name(&details, "2024-03-09"),
            "Ectomorph Plan - 2024-03-09"
        );
    }

    #[test]
    fn display_name_lowers_trailing_characters() {
        let details = json!({ "bodyType": "ENDOMORPH" });
        assert_eq!(
            plan_display_name(&details, "2024-03-09"),
            "Endomorph Plan - 2024-03-09"
        );
    }

    #[test]
    fn display_name_falls_back_to_custom() {
        for details in [json!({}), json!({ "bodyType": null }), json!({ "bodyType": "" })] {
            assert_eq!(
                plan_display_name(&details, "2024-03-09"),
                "Custom Plan - 2024-03-09"
            );
        }
    }

    #[test]
    fn save_request_uses_camel_case_keys() {
        let payload: SavePlanRequest = serde_json::from_str(
            r#"{"planData": {"diet": []}, "userDetails": {"bodyType": "mesomorph"}}"#,
        )
        .unwrap();
        assert!(payload.plan_data.is_some());
        assert_eq!(
            payload.user_details.unwrap()["bodyType"],
            json!("mesomorph")
        );
    }
}
