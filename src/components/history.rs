use leptos::prelude::*;

use crate::console::ConsoleState;

#[component]
pub fn SessionSidebar(state: RwSignal<ConsoleState>) -> impl IntoView {
    let history = Memo::new(move |_| state.with(|s| s.history.iter().cloned().collect::<Vec<_>>()));

    view! {
        <aside class="w-60 border-r border-white/5 px-5 py-8">
            <div class="uppercase text-xs opacity-60 mb-5">"Session"</div>
            {move || {
                history
                    .get()
                    .into_iter()
                    .map(|question| view! { <div class="text-[13px] opacity-70 mb-3">{question}</div> })
                    .collect_view()
            }}
        </aside>
    }
}
