use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_grades_calculate(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.record.calculate_grades();
    let r = &state.record;
    ok(
        &req.id,
        json!({
            "totalScore": r.total_score(),
            "percentage": r.percentage(),
            "grade": r.grade(),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "grades.calculate" => Some(handle_grades_calculate(state, req)),
        _ => None,
    }
}
