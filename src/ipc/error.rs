use serde::Serialize;
use serde_json::json;

/// The `error` object of a failed response.
#[derive(Debug, Serialize)]
pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn bad_params(message: impl Into<String>) -> Self {
        Self {
            code: "bad_params",
            message: message.into(),
            details: None,
        }
    }

    pub fn response(self, id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "ok": false,
            "error": self,
        })
    }
}

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result,
    })
}

pub fn err(
    id: &str,
    code: &'static str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    HandlerErr {
        code,
        message: message.into(),
        details,
    }
    .response(id)
}
