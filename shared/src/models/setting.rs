//! Settings row

use serde::{Deserialize, Serialize};

/// Key of the row holding the unlock passcode
pub const PASSCODE_KEY: &str = "passcode";

/// Key/value configuration row
///
/// Values are stored untyped; a passcode saved as a number (`1234`) must
/// compare equal to the typed string `"1234"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl Setting {
    /// Value rendered as text, `None` when absent, `null` or blank
    pub fn value_text(&self) -> Option<String> {
        let text = match self.value.as_ref()? {
            serde_json::Value::Null => return None,
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_text() {
        let text: Setting = serde_json::from_value(json!({"key": "passcode", "value": "4321"})).unwrap();
        let number: Setting = serde_json::from_value(json!({"key": "passcode", "value": 1234})).unwrap();
        let blank: Setting = serde_json::from_value(json!({"key": "passcode", "value": ""})).unwrap();
        let null: Setting = serde_json::from_value(json!({"key": "passcode", "value": null})).unwrap();

        assert_eq!(text.value_text().as_deref(), Some("4321"));
        assert_eq!(number.value_text().as_deref(), Some("1234"));
        assert_eq!(blank.value_text(), None);
        assert_eq!(null.value_text(), None);
    }
}
