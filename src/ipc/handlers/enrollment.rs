use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use crate::record::StudentRecord;
use serde_json::json;

fn status(record: &StudentRecord) -> serde_json::Value {
    json!({
        "enrolled": record.enrolled(),
        "statusTag": record.status_tag().as_str(),
    })
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "enrollment.enroll" => state.record.enroll(),
        "enrollment.unenroll" => state.record.unenroll(),
        "enrollment.toggle" => state.record.toggle_enrollment(),
        _ => return None,
    }
    Some(ok(&req.id, status(&state.record)))
}
