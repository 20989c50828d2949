//! "Test Runs" panel with title search.

#[cfg(test)]
#[path = "test_cases_table_test.rs"]
mod test_cases_table_test;

use leptos::prelude::*;

use crate::components::section_title::SectionTitle;

pub const NO_RUNS_TEXT: &str = "No Test Runs Yet...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestRun {
    pub id: i64,
    pub title: String,
}

/// Runs whose title contains `query`, case-insensitively. A blank query keeps all.
pub fn filter_runs<'a>(runs: &'a [TestRun], query: &str) -> Vec<&'a TestRun> {
    let needle = query.trim().to_lowercase();
    runs.iter()
        .filter(|run| needle.is_empty() || run.title.to_lowercase().contains(&needle))
        .collect()
}

#[component]
pub fn TestCasesTable(#[prop(optional)] runs: Vec<TestRun>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let add_hovered = RwSignal::new(false);
    let runs = StoredValue::new(runs);

    let visible = move || {
        runs.with_value(|all| filter_runs(all, &query.get()).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="thanqa-test-cases">
            <SectionTitle title="Test Runs"/>
            <div
                class=move || {
                    if add_hovered.get() {
                        "thanqa-add-test-case-icon-on-hover"
                    } else {
                        "thanqa-add-test-case-icon-initial"
                    }
                }
                on:mousemove=move |_| add_hovered.set(true)
                on:mouseleave=move |_| add_hovered.set(false)
            ></div>
            <div class="thanqa-search">
                <div class="thanqa-search-icon">
                    <input
                        id="searchInput"
                        class="thanqa-search-input"
                        placeholder="Search test runs by title"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="thanqa-no-content-text">{NO_RUNS_TEXT}</p> }
            >
                <ul class="thanqa-test-runs">
                    <For each=visible key=|run| run.id children=|run| view! { <li>{run.title}</li> }/>
                </ul>
            </Show>
        </div>
    }
}
