use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::answer::AnswerCard;
use crate::components::citations::SourcesPanel;
use crate::components::controls::ConsoleControls;
use crate::components::history::SessionSidebar;
use crate::console::{ConsoleCommand, ConsoleEvent, ConsoleState};

#[component]
pub fn ExecConsole() -> impl IntoView {
    let state = RwSignal::new(ConsoleState::new());

    // responses are applied in arrival order, not submission order
    let dispatch = move |event: ConsoleEvent| {
        let command = state.try_update(|s| s.apply(event)).flatten();

        if let Some(ConsoleCommand::Ask(question)) = command {
            spawn_local(async move {
                let outcome = match api::ask(&question).await {
                    Ok(response) => {
                        if let Some(error) = &response.error {
                            log::warn!("Relay returned an error: {}", error);
                        }
                        ConsoleEvent::Answered { question, response }
                    }
                    Err(e) => {
                        log::error!("Chat request failed: {}", e);
                        ConsoleEvent::Failed
                    }
                };
                state.update(|s| {
                    s.apply(outcome);
                });
            });
        }
    };

    let loading = move || state.with(|s| s.loading);

    view! {
        <main class="flex min-h-screen bg-gradient-to-b from-ink-800 to-ink-900 text-white font-sans">
            <SessionSidebar state=state />

            <div class="flex-1 p-12">
                <div class="mb-8">
                    <h1 class="text-3xl font-light">"Agentic Exec"</h1>
                    <div class="text-xs tracking-[0.2em] uppercase opacity-50">
                        "Executive Intelligence Console"
                    </div>
                </div>

                <ConsoleControls state=state />

                <div class="flex gap-4 mb-10">
                    <textarea
                        class="flex-1 p-4 bg-white/5 border border-white/10 rounded-lg text-white resize-none
                        focus:outline-none focus:ring-1 focus:ring-white/20"
                        placeholder="Enter executive question..."
                        prop:value=move || state.with(|s| s.question.clone())
                        on:input=move |ev| dispatch(ConsoleEvent::QuestionChanged(event_target_value(&ev)))
                    ></textarea>
                    <button
                        class="px-6 py-3 bg-ink-700 border border-white/20 rounded-lg text-white cursor-pointer
                        disabled:opacity-50 disabled:cursor-not-allowed"
                        on:click=move |_| dispatch(ConsoleEvent::Submit)
                        prop:disabled=loading
                    >
                        {move || if loading() { "Processing..." } else { "Analyse" }}
                    </button>
                </div>

                <AnswerCard state=state />
                <SourcesPanel state=state />
            </div>
        </main>
    }
}
