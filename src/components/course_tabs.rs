use leptos::*;

/// One tab of a course page.
#[derive(Clone)]
pub struct TabPanel {
    pub id: &'static str,
    pub label: &'static str,
    pub content: ViewFn,
}

impl TabPanel {
    pub fn new(id: &'static str, label: &'static str, content: impl Into<ViewFn>) -> Self {
        Self {
            id,
            label,
            content: content.into(),
        }
    }
}

/// Tab strip showing exactly one panel at a time. Hidden panels stay mounted
/// so their state (e.g. a half-written review) survives switching tabs.
#[component]
pub fn CourseTabs(tabs: Vec<TabPanel>, #[prop(optional)] initial: usize) -> impl IntoView {
    let first = tabs.get(initial).or(tabs.first()).map(|t| t.id).unwrap_or_default();
    let (active, set_active) = create_signal(first);

    let buttons = tabs
        .iter()
        .map(|tab| {
            let id = tab.id;
            view! {
                <button
                    class="tab-btn"
                    class:active=move || active.get() == id
                    on:click=move |_| set_active.set(id)
                >
                    {tab.label}
                </button>
            }
        })
        .collect_view();

    let panels = tabs
        .into_iter()
        .map(|tab| {
            let id = tab.id;
            view! {
                <div
                    id=id
                    class="tab-content"
                    style:display=move || if active.get() == id { "block" } else { "none" }
                >
                    {tab.content.run()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="course-tabs">
            <div class="tab-buttons" role="tablist">{buttons}</div>
            {panels}
        </div>
    }
}
