use leptos::prelude::*;

use crate::console::{ConsoleEvent, ConsoleState};

const SMALL_BUTTON: &str = "px-3.5 py-1.5 bg-white/5 border border-white/15 rounded-md text-white cursor-pointer";

#[component]
pub fn ConsoleControls(state: RwSignal<ConsoleState>) -> impl IntoView {
    let toggle = move |event: ConsoleEvent| {
        state.update(|s| {
            s.apply(event);
        });
    };

    view! {
        <div class="flex gap-5 mb-6 text-[13px] items-center">
            <label class="flex items-center gap-1.5">
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.filters.include_hbr)
                    on:change=move |_| toggle(ConsoleEvent::ToggleIncludeHbr)
                />
                "Include HBR"
            </label>

            <label class="flex items-center gap-1.5">
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.filters.board_mode)
                    on:change=move |_| toggle(ConsoleEvent::ToggleBoardMode)
                />
                "Board Mode"
            </label>

            // export is not wired up yet
            <button class=SMALL_BUTTON>"Download PDF"</button>
            <button class=SMALL_BUTTON>"Copy Summary"</button>
        </div>
    }
}
