//! Record Table Component

use leptos::prelude::*;

use crate::models::{display_field, Field};
use crate::store::{use_records_store, RecordsStateStoreFields};

/// Table of records held in the store
#[component]
pub fn RecordTable() -> impl IntoView {
    let store = use_records_store();

    view! {
        <table class="table table-bordered">
            <thead>
                <tr>
                    {Field::ALL.into_iter().map(|field| view! { <th>{field.placeholder()}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || store.records().get().into_iter().map(|record| view! {
                    <tr>
                        {Field::ALL.into_iter().map(|field| view! {
                            <td>{display_field(&record, field.name())}</td>
                        }).collect_view()}
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
