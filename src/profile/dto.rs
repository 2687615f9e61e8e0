use serde::{Deserialize, Serialize};

/// Physical attributes of the calling account. All nullable until set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<f64>,
    pub body_type: Option<String>,
}

/// Partial update: only supplied fields overwrite stored values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDetailsRequest {
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<f64>,
    pub body_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_type_uses_camel_case_on_the_wire() {
        let payload: UpdateDetailsRequest =
            serde_json::from_str(r#"{"bodyType": "ectomorph", "age": 30}"#).unwrap();
        assert_eq!(payload.body_type.as_deref(), Some("ectomorph"));
        assert_eq!(payload.age, Some(30));
        assert!(payload.height.is_none());

        let details = UserDetails {
            age: Some(30),
            height: None,
            weight: Some(72.5),
            body_type: Some("ectomorph".into()),
        };
        let json = serde_json::to_string(&details).unwrap();
        assert!(json.contains("\"bodyType\""));
        assert!(!json.contains("body_type"));
    }
}
