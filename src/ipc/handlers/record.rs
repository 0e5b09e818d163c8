use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::record::{RecordPatch, StudentRecord};
use serde_json::json;

fn snapshot(record: &StudentRecord) -> serde_json::Value {
    json!({ "record": record })
}

fn handle_record_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, snapshot(&state.record))
}

fn parse_patch(params: &serde_json::Value) -> Result<RecordPatch, HandlerErr> {
    let Some(patch) = params.get("patch") else {
        return Err(HandlerErr::bad_params("missing patch"));
    };
    if !patch.is_object() {
        return Err(HandlerErr::bad_params("patch must be an object"));
    }
    serde_json::from_value(patch.clone()).map_err(|e| HandlerErr {
        code: "bad_params",
        message: format!("invalid patch: {e}"),
        details: Some(json!({ "patch": patch })),
    })
}

fn handle_record_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let patch = match parse_patch(&req.params) {
        Ok(p) => p,
        Err(e) => return e.response(&req.id),
    };
    state.record.apply_patch(patch);
    ok(&req.id, snapshot(&state.record))
}

fn handle_record_reset(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.record = StudentRecord::default();
    ok(&req.id, snapshot(&state.record))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "record.get" => Some(handle_record_get(state, req)),
        "record.update" => Some(handle_record_update(state, req)),
        "record.reset" => Some(handle_record_reset(state, req)),
        _ => None,
    }
}
