//! Record Form Component
//!
//! Date/title/amount entry form that posts new records to the server.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api::{FetchSubmitter, RecordSubmitter};
use crate::config::ClientConfig;
use crate::form::{handle_change, submit_and_reset};
use crate::models::{Field, FormState};

/// Inline form for creating a record
///
/// # Arguments
/// * `on_new_record` - Called once with the server's response after each successful post
/// * `submitter` - Transport for the post; defaults to fetch against the current page
#[component]
pub fn RecordForm(
    #[prop(into)] on_new_record: Callback<Value>,
    #[prop(optional)] submitter: Option<Rc<dyn RecordSubmitter>>,
) -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let submitter = StoredValue::new_local(submitter.unwrap_or_else(|| {
        Rc::new(FetchSubmitter::new(ClientConfig::from_document())) as Rc<dyn RecordSubmitter>
    }));

    let on_input = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        match handle_change(&form, &input.name(), input.value()) {
            Ok(field) => log::debug!("[RecordForm] {} changed", field),
            Err(e) => log::warn!("[RecordForm] Ignoring input: {}", e),
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submitter = submitter.get_value();
        log::info!("[RecordForm] Submitting {:?}", form.get_untracked());

        spawn_local(async move {
            let result = submit_and_reset(submitter.as_ref(), &form, |data| {
                on_new_record.run(data)
            })
            .await;
            if let Err(e) = result {
                log::error!("[RecordForm] Submit failed: {}", e);
            }
        });
    };

    view! {
        <div class="container">
            <form class="form-inline" on:submit=on_submit>
                {Field::ALL.into_iter().map(|field| view! {
                    <div class="form-group">
                        <input
                            type=field.input_type()
                            class="form-control"
                            placeholder=field.placeholder()
                            name=field.name()
                            prop:value=move || form.with(|state| state.get(field).to_string())
                            on:input=on_input
                        />
                    </div>
                }).collect_view()}
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !form.with(FormState::is_valid)
                >
                    "Create Record"
                </button>
            </form>
        </div>
    }
}
