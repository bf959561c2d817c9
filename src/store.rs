//! Records Store
//!
//! Uses Leptos reactive_stores for the list of records created this session.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::Value;

/// Records returned by the server, newest last
#[derive(Clone, Debug, Default, Store)]
pub struct RecordsState {
    pub records: Vec<Value>,
}

/// Type alias for the store
pub type RecordsStore = Store<RecordsState>;

/// Get the records store from context
pub fn use_records_store() -> RecordsStore {
    expect_context::<RecordsStore>()
}

/// Append a freshly created record
pub fn store_add_record(store: &RecordsStore, record: Value) {
    store.records().write().push(record);
}
