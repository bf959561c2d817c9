//! Records App
//!
//! Host page: the entry form above a table of records created so far.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::Value;

use crate::components::{RecordForm, RecordTable};
use crate::store::{store_add_record, RecordsState, RecordsStore};

#[component]
pub fn App() -> impl IntoView {
    let store: RecordsStore = Store::new(RecordsState::default());
    provide_context(store);

    let on_new_record = Callback::new(move |record: Value| {
        log::info!("[APP] New record: {}", record);
        store_add_record(&store, record);
    });

    view! {
        <div class="records">
            <h2 class="title">"Records"</h2>
            <RecordForm on_new_record=on_new_record />
            <hr />
            <RecordTable />
        </div>
    }
}
