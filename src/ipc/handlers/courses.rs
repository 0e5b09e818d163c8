use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::record::RecordError;
use serde_json::json;

fn course_index(params: &serde_json::Value) -> Result<usize, HandlerErr> {
    let Some(raw) = params.get("index") else {
        return Err(HandlerErr::bad_params("missing index"));
    };
    raw.as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| HandlerErr {
            code: "bad_params",
            message: "index must be a non-negative integer".to_string(),
            details: Some(json!({ "index": raw })),
        })
}

fn handle_courses_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    // Optional `name` stages the value first, same as typing into the field.
    match req.params.get("name") {
        None | Some(serde_json::Value::Null) => {}
        Some(serde_json::Value::String(s)) => state.record.pending_course_name = s.clone(),
        Some(_) => return HandlerErr::bad_params("name must be a string").response(&req.id),
    }

    let added = state.record.add_course();
    ok(
        &req.id,
        json!({
            "added": added,
            "courses": state.record.courses(),
            "pendingCourseName": state.record.pending_course_name,
        }),
    )
}

fn handle_courses_remove(state: &mut AppState, req: &Request) -> serde_json::Value {
    let index = match course_index(&req.params) {
        Ok(i) => i,
        Err(e) => return e.response(&req.id),
    };
    match state.record.remove_course(index) {
        Ok(removed) => ok(
            &req.id,
            json!({
                "removed": removed,
                "courses": state.record.courses(),
            }),
        ),
        Err(e) => {
            let RecordError::IndexOutOfRange { index, len } = e;
            HandlerErr {
                code: "index_out_of_range",
                message: e.to_string(),
                details: Some(json!({ "index": index, "len": len })),
            }
            .response(&req.id)
        }
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "courses.add" => Some(handle_courses_add(state, req)),
        "courses.remove" => Some(handle_courses_remove(state, req)),
        _ => None,
    }
}
