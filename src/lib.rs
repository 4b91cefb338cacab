// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the one-shot push command.
//
// Module responsibilities:
// - `script`: Finds the embedded platform token in a script file and
//   splits it from the payload that gets uploaded.
// - `api`: Encapsulates the HTTP interaction with the platform (a single
//   form-encoded push) and the response code check.
// - `status`: The status display contract plus the timestamped reporter
//   every outcome is funneled through.
// - `sync`: The whole flow (read document -> extract -> push -> report)
//   as one function over the host capabilities.
// - `ui`: Terminal implementations of the host capabilities: file-backed
//   workspace, spinner status line, path prompt.
//
// Keeping this separation makes it easy to test the flow end to end with
// an in-memory status display and a mock HTTP server.
pub mod api;
pub mod script;
pub mod status;
pub mod sync;
pub mod ui;
