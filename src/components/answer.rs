use leptos::prelude::*;

use crate::console::{ConsoleEvent, ConsoleState, SectionView};

/// The numbered answer, one collapsible block per visible section.
#[component]
pub fn AnswerCard(state: RwSignal<ConsoleState>) -> impl IntoView {
    let has_answer = Memo::new(move |_| state.with(|s| s.answer().is_some()));
    let sections = Memo::new(move |_| state.with(|s| s.visible_sections()));

    move || {
        has_answer.get().then(|| {
            view! {
                <div class="border border-white/5 p-8 mb-10">
                    {move || {
                        sections
                            .get()
                            .into_iter()
                            .map(|section| view! { <SectionBlock section=section state=state /> })
                            .collect_view()
                    }}
                </div>
            }
        })
    }
}

#[component]
fn SectionBlock(section: SectionView, state: RwSignal<ConsoleState>) -> impl IntoView {
    let glyph = section.glyph();
    let title = section.title.clone();
    let toggle = move |_| {
        state.update(|s| {
            s.apply(ConsoleEvent::ToggleSection(title.clone()));
        });
    };

    view! {
        <div class="mb-5">
            <div class="text-sm tracking-widest cursor-pointer flex justify-between" on:click=toggle>
                {section.title}
                <span class="opacity-50">{glyph}</span>
            </div>
            {section
                .expanded
                .then(|| {
                    view! {
                        <div class="mt-2.5 text-sm leading-relaxed opacity-85 whitespace-pre-line">
                            {section.body}
                        </div>
                    }
                })}
        </div>
    }
}
