//! Record Form Logic
//!
//! Field changes and the submit lifecycle, independent of the view layer.

use leptos::prelude::*;
use serde_json::Value;

use crate::api::RecordSubmitter;
use crate::error::{FormError, SubmitError};
use crate::models::{Field, FormState, SubmissionPayload};

/// Somewhere the form's state lives
pub trait FormStore {
    fn snapshot(&self) -> FormState;
    fn replace(&self, state: FormState);
    fn modify(&self, f: impl FnOnce(&mut FormState));
}

impl FormStore for RwSignal<FormState> {
    fn snapshot(&self) -> FormState {
        self.get_untracked()
    }

    fn replace(&self, state: FormState) {
        self.set(state);
    }

    fn modify(&self, f: impl FnOnce(&mut FormState)) {
        self.update(f);
    }
}

/// Apply an input edit by the input's `name`. Unknown names leave the state alone.
pub fn handle_change(
    store: &impl FormStore,
    name: &str,
    value: String,
) -> Result<Field, FormError> {
    let field: Field = name.parse()?;
    store.modify(|state| state.set(field, value));
    Ok(field)
}

/// Post the current state, hand the response to `on_new_record`, then clear the form.
///
/// On failure the form keeps its contents and the callback is not called.
pub async fn submit_and_reset<S>(
    submitter: &S,
    store: &impl FormStore,
    on_new_record: impl FnOnce(Value),
) -> Result<(), SubmitError>
where
    S: RecordSubmitter + ?Sized,
{
    let payload = SubmissionPayload::from(store.snapshot());
    let data = submitter.submit(&payload).await?;
    on_new_record(data);
    store.replace(FormState::default());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    impl FormStore for RefCell<FormState> {
        fn snapshot(&self) -> FormState {
            self.borrow().clone()
        }

        fn replace(&self, state: FormState) {
            *self.borrow_mut() = state;
        }

        fn modify(&self, f: impl FnOnce(&mut FormState)) {
            f(&mut self.borrow_mut());
        }
    }

    /// Records every payload and answers with a canned result
    struct FakeSubmitter {
        sent: RefCell<Vec<SubmissionPayload>>,
        reply: Result<Value, SubmitError>,
    }

    impl FakeSubmitter {
        fn answering(reply: Result<Value, SubmitError>) -> Self {
            Self { sent: RefCell::new(Vec::new()), reply }
        }
    }

    #[async_trait(?Send)]
    impl RecordSubmitter for FakeSubmitter {
        async fn submit(&self, payload: &SubmissionPayload) -> Result<Value, SubmitError> {
            self.sent.borrow_mut().push(payload.clone());
            self.reply.clone()
        }
    }

    fn filled_store() -> RefCell<FormState> {
        let store = RefCell::new(FormState::default());
        handle_change(&store, "title", "Coffee".to_string()).unwrap();
        handle_change(&store, "date", "2024-01-01".to_string()).unwrap();
        handle_change(&store, "amount", "5".to_string()).unwrap();
        store
    }

    #[test]
    fn test_change_sets_only_named_field() {
        let store = RefCell::new(FormState::default());
        let field = handle_change(&store, "date", "2024-01-01".to_string()).unwrap();
        assert_eq!(field, Field::Date);
        assert_eq!(
            store.snapshot(),
            FormState { date: "2024-01-01".to_string(), ..FormState::default() }
        );
    }

    #[test]
    fn test_change_is_idempotent() {
        let once = RefCell::new(FormState::default());
        handle_change(&once, "title", "Coffee".to_string()).unwrap();

        let twice = RefCell::new(FormState::default());
        handle_change(&twice, "title", "Coffee".to_string()).unwrap();
        handle_change(&twice, "title", "Coffee".to_string()).unwrap();

        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let store = filled_store();
        let before = store.snapshot();
        let err = handle_change(&store, "notes", "x".to_string()).unwrap_err();
        assert_eq!(err, FormError::UnknownField("notes".to_string()));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_validity_tracks_changes() {
        let store = RefCell::new(FormState::default());
        handle_change(&store, "date", "2024-01-01".to_string()).unwrap();
        handle_change(&store, "amount", "5".to_string()).unwrap();
        assert!(!store.snapshot().is_valid());

        handle_change(&store, "title", "Coffee".to_string()).unwrap();
        assert!(store.snapshot().is_valid());

        handle_change(&store, "amount", String::new()).unwrap();
        assert!(!store.snapshot().is_valid());
    }

    #[tokio::test]
    async fn test_submit_posts_once_then_resets() {
        let store = filled_store();
        let response = json!({ "id": 1, "title": "Coffee", "date": "2024-01-01", "amount": "5.0" });
        let submitter = FakeSubmitter::answering(Ok(response.clone()));
        let calls = Cell::new(0);
        let received = RefCell::new(None);

        submit_and_reset(&submitter, &store, |data| {
            calls.set(calls.get() + 1);
            *received.borrow_mut() = Some(data);
        })
        .await
        .expect("submit failed");

        let sent = submitter.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].record,
            FormState {
                title: "Coffee".to_string(),
                date: "2024-01-01".to_string(),
                amount: "5".to_string(),
            }
        );
        assert_eq!(calls.get(), 1);
        assert_eq!(received.into_inner(), Some(response));
        assert_eq!(store.snapshot(), FormState::default());
        assert!(!store.snapshot().is_valid());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let store = filled_store();
        let before = store.snapshot();
        let submitter = FakeSubmitter::answering(Err(SubmitError::Status(500)));
        let called = Cell::new(false);

        let result = submit_and_reset(&submitter, &store, |_| called.set(true)).await;

        assert_eq!(result, Err(SubmitError::Status(500)));
        assert!(!called.get());
        assert_eq!(store.snapshot(), before);
        assert_eq!(submitter.sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_through_trait_object() {
        let store = filled_store();
        let submitter: Box<dyn RecordSubmitter> =
            Box::new(FakeSubmitter::answering(Ok(json!("created"))));
        let received = RefCell::new(Value::Null);

        submit_and_reset(submitter.as_ref(), &store, |data| *received.borrow_mut() = data)
            .await
            .unwrap();

        assert_eq!(received.into_inner(), json!("created"));
        assert_eq!(store.snapshot(), FormState::default());
    }

    #[test]
    fn test_signal_change_sets_one_field() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(FormState::default());
            handle_change(&form, "title", "Coffee".to_string()).unwrap();
            handle_change(&form, "date", "2024-01-01".to_string()).unwrap();
            assert!(!form.get_untracked().is_valid());

            handle_change(&form, "amount", "5".to_string()).unwrap();
            assert_eq!(
                form.get_untracked(),
                FormState {
                    title: "Coffee".to_string(),
                    date: "2024-01-01".to_string(),
                    amount: "5".to_string(),
                }
            );
            assert!(form.get_untracked().is_valid());

            handle_change(&form, "title", "Tea".to_string()).unwrap();
            assert_eq!(form.get_untracked().title, "Tea");
            assert_eq!(form.get_untracked().date, "2024-01-01");
            assert_eq!(form.get_untracked().amount, "5");

            assert!(handle_change(&form, "notes", "x".to_string()).is_err());
            assert_eq!(form.get_untracked().title, "Tea");
        });
    }

    #[tokio::test]
    async fn test_signal_resets_after_submit() {
        let owner = Owner::new();
        let form = owner.with(|| RwSignal::new(FormState::default()));
        handle_change(&form, "title", "Coffee".to_string()).unwrap();
        handle_change(&form, "date", "2024-01-01".to_string()).unwrap();
        handle_change(&form, "amount", "5".to_string()).unwrap();
        assert!(form.get_untracked().is_valid());

        let submitter = FakeSubmitter::answering(Ok(json!({ "id": 1 })));
        let calls = Cell::new(0);
        submit_and_reset(&submitter, &form, |_| calls.set(calls.get() + 1))
            .await
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(submitter.sent.borrow()[0].record.title, "Coffee");
        assert_eq!(form.get_untracked(), FormState::default());
        assert!(!form.get_untracked().is_valid());
        drop(owner);
    }
}
