//! Streaming chat consumer for the generation service.
//!
//! Issues one `POST /generate` per send and consumes the chunked NDJSON
//! response incrementally: each browser read yields raw bytes, the
//! [`LineFramer`] releases complete lines, and every decoded record updates
//! the conversation's trailing placeholder turn. Reads are awaited strictly
//! sequentially by this one consumer, which is what guarantees record
//! ordering. No timeout, no retry, no cancellation.
//!
//! The record-application pipeline (`apply_chunk` / `apply_end`) is pure and
//! compiled on every target; only the fetch loop needs a browser and is
//! gated behind the `web` feature.

use super::stream::{LineFramer, decode_record};
use crate::state::chat::ChatState;

#[cfg(feature = "web")]
use super::config::ServiceConfig;
#[cfg(feature = "web")]
use super::types::{GenerateProfile, GenerateRequest, TurnPayload};

/// Feed one chunk of response bytes through the framer and apply every
/// record it completes.
pub fn apply_chunk(state: &mut ChatState, framer: &mut LineFramer, bytes: &[u8]) {
    for line in framer.push(bytes) {
        apply_line(state, &line);
    }
}

/// End of stream: flush the framer's trailing partial line, then finalize
/// the placeholder turn.
pub fn apply_end(state: &mut ChatState, framer: LineFramer) {
    if let Some(line) = framer.finish() {
        apply_line(state, &line);
    }
    state.finish_stream();
}

/// Apply one complete line. Malformed lines are dropped with a warning and
/// never abort the stream.
fn apply_line(state: &mut ChatState, line: &[u8]) {
    match decode_record(line) {
        Ok(Some(record)) => state.apply_record(&record),
        Ok(None) => {}
        Err(err) => leptos::logging::warn!("dropping malformed stream record: {err}"),
    }
}

/// Spawn the generation request and stream consumption as a local task.
///
/// The caller has already applied `begin_send` (the user turn is visible);
/// this drives the rest of the lifecycle: `begin_stream` once the response
/// body opens, `apply_record` per streamed record, then `finish_stream` or
/// `fail_stream`.
#[cfg(feature = "web")]
pub fn spawn_generate(
    config: ServiceConfig,
    message: String,
    history: Vec<TurnPayload>,
    constraints: GenerateProfile,
    chat: leptos::prelude::RwSignal<ChatState>,
) {
    leptos::task::spawn_local(run_generate(config, message, history, constraints, chat));
}

#[cfg(feature = "web")]
async fn run_generate(
    config: ServiceConfig,
    message: String,
    history: Vec<TurnPayload>,
    constraints: GenerateProfile,
    chat: leptos::prelude::RwSignal<ChatState>,
) {
    use leptos::prelude::Update;

    let request = GenerateRequest { message, history, profile: constraints };
    if let Err(err) = stream_generate(&config, &request, chat).await {
        leptos::logging::warn!("generate request failed: {err}");
        chat.update(ChatState::fail_stream);
    }
}

/// Open the response body as an incremental byte stream and pump it through
/// the framing pipeline.
#[cfg(feature = "web")]
async fn stream_generate(
    config: &ServiceConfig,
    request: &GenerateRequest,
    chat: leptos::prelude::RwSignal<ChatState>,
) -> Result<(), String> {
    use leptos::prelude::Update;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let body = serde_json::to_string(request).map_err(|e| e.to_string())?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));
    let headers = web_sys::Headers::new().map_err(|e| format!("{e:?}"))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    opts.set_headers(&headers);

    let http_request =
        web_sys::Request::new_with_str_and_init(&config.generate_url(), &opts).map_err(|e| format!("{e:?}"))?;
    let window = web_sys::window().ok_or("no window")?;
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_request(&http_request))
        .await
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_owned())?;

    if !resp.ok() {
        return Err(format!("generate returned status {}", resp.status()));
    }
    let body_stream = resp.body().ok_or("response has no body")?;
    let reader: web_sys::ReadableStreamDefaultReader = body_stream.get_reader().unchecked_into();

    chat.update(ChatState::begin_stream);

    let mut framer = LineFramer::new();
    loop {
        let chunk = JsFuture::from(reader.read()).await.map_err(|e| format!("{e:?}"))?;
        let done = js_sys::Reflect::get(&chunk, &JsValue::from_str("done"))
            .map_err(|e| format!("{e:?}"))?
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }
        let value = js_sys::Reflect::get(&chunk, &JsValue::from_str("value")).map_err(|e| format!("{e:?}"))?;
        let array: js_sys::Uint8Array = value.dyn_into().map_err(|_| "unexpected chunk value".to_owned())?;
        let bytes = array.to_vec();
        chat.update(|c| apply_chunk(c, &mut framer, &bytes));
    }

    chat.update(|c| apply_end(c, framer));
    Ok(())
}

#[cfg(test)]
#[path = "chat_client_test.rs"]
mod tests;
