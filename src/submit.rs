//! Outbound submission of a completed ritual
//!
//! Fire-and-forget: the controller hands a form to the submitter and moves
//! on. The outcome, when it arrives, only drives a cosmetic follow-up line.

use crate::ritual::DecodedDate;

/// Constant form identifier expected by the receiving endpoint
pub const FORM_NAME: &str = "magic-form";
/// Sent in place of a missing email
pub const NO_EMAIL: &str = "Not provided";

/// Fields posted for one successful reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionForm {
    /// Ritual this submission belongs to; echoed back with the outcome
    pub ritual_id: u64,
    pub name: String,
    pub email: Option<String>,
    pub final_number: i64,
    pub date: DecodedDate,
}

impl SubmissionForm {
    /// Form fields in wire order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("form-name", FORM_NAME.to_string()),
            ("name", self.name.clone()),
            (
                "email",
                self.email.clone().unwrap_or_else(|| NO_EMAIL.to_string()),
            ),
            ("final-number", self.final_number.to_string()),
            ("predicted-dob", self.date.dob_label()),
        ]
    }
}

/// Result reported back by a submitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Recorded,
    Rejected { status: u16 },
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Recorded)
    }
}

pub trait Submitter {
    /// Start a submission. Must not block on the remote end.
    fn submit(&self, form: SubmissionForm);
}

/// Native submitter: records the form in the log and nothing else
#[derive(Debug, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&self, form: SubmissionForm) {
        for (key, value) in form.fields() {
            log::info!("submission {}={}", key, value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchSubmitter;

#[cfg(target_arch = "wasm32")]
mod fetch {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    use super::{SubmissionForm, SubmitOutcome, Submitter};

    #[wasm_bindgen(inline_js = "
        export async function post_form(url, fields) {
            const form = new FormData();
            for (const [key, value] of fields) {
                form.append(key, value);
            }
            const response = await fetch(url, { method: 'POST', body: form });
            return response.status;
        }
    ")]
    extern "C" {
        fn post_form(url: &str, fields: JsValue) -> js_sys::Promise;
    }

    /// Posts the form to the hosting page's form handler
    pub struct FetchSubmitter {
        url: String,
        on_settled: Rc<dyn Fn(u64, SubmitOutcome)>,
    }

    impl FetchSubmitter {
        pub fn new(url: impl Into<String>, on_settled: Rc<dyn Fn(u64, SubmitOutcome)>) -> Self {
            Self {
                url: url.into(),
                on_settled,
            }
        }
    }

    impl Submitter for FetchSubmitter {
        fn submit(&self, form: SubmissionForm) {
            let pairs = js_sys::Array::new();
            for (key, value) in form.fields() {
                let pair = js_sys::Array::new();
                pair.push(&JsValue::from_str(key));
                pair.push(&JsValue::from_str(&value));
                pairs.push(&pair);
            }

            let promise = post_form(&self.url, pairs.into());
            let on_settled = self.on_settled.clone();
            let ritual_id = form.ritual_id;
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match JsFuture::from(promise).await {
                    Ok(status) => {
                        let status = status.as_f64().unwrap_or(0.0) as u16;
                        if (200..300).contains(&status) {
                            SubmitOutcome::Recorded
                        } else {
                            SubmitOutcome::Rejected { status }
                        }
                    }
                    Err(e) => SubmitOutcome::Failed(format!("{:?}", e)),
                };
                on_settled(ritual_id, outcome);
            });
        }
    }
}
