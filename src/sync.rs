// The whole push flow over the host capabilities. The function never
// fails: every outcome, including transport errors, is rendered as one
// status line and folded into the returned bool.

use anyhow::Result;
use tracing::debug;

use crate::api::ApiClient;
use crate::script;
use crate::status::{report, StatusSink};

/// The document the host currently has open.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name, shown in the empty-file message.
    pub name: String,
    pub text: String,
}

/// Host capability: which document is open right now. `Ok(None)` means
/// nothing is open; `Err` means the document exists but could not be read.
pub trait Workspace {
    fn active_document(&self) -> Result<Option<Document>>;
}

/// Run one complete sync: read the active document, extract token and
/// payload, push, and report the outcome. Returns whether the platform
/// accepted the upload.
pub fn sync_active_script(
    workspace: &dyn Workspace,
    api: &ApiClient,
    status: &mut dyn StatusSink,
) -> bool {
    let doc = match workspace.active_document() {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            report(status, "please open a botvs script file first...");
            return false;
        }
        Err(err) => {
            report(status, &format!("{err:#}"));
            return false;
        }
    };

    let script = match script::parse(&doc.name, &doc.text) {
        Ok(script) => script,
        Err(err) => {
            report(status, &err.to_string());
            return false;
        }
    };

    match api.push(&script.token, &script.body) {
        Ok(receipt) if receipt.accepted => {
            report(status, &format!("upload successfully!{}", receipt.body));
            true
        }
        Ok(receipt) => {
            report(status, &format!("upload failed!{}", receipt.body));
            false
        }
        Err(err) => {
            debug!(error = %err, "push did not complete");
            report(status, &format!("{err:#}"));
            false
        }
    }
}
