use leptos::prelude::*;

use crate::console::ConsoleState;
use crate::model::Citation;

#[component]
pub fn SourcesPanel(state: RwSignal<ConsoleState>) -> impl IntoView {
    let citations = Memo::new(move |_| {
        state.with(|s| {
            s.response
                .as_ref()
                .map(|r| r.citations().to_vec())
                .unwrap_or_default()
        })
    });

    move || {
        let citations = citations.get();
        (!citations.is_empty()).then(|| {
            view! {
                <div class="border-t border-white/5 pt-8">
                    <div class="uppercase text-xs tracking-[0.2em] opacity-60 mb-5">
                        "Intelligence Sources"
                    </div>
                    {citations
                        .into_iter()
                        .map(|citation| view! { <CitationCard citation=citation /> })
                        .collect_view()}
                </div>
            }
        })
    }
}

#[component]
fn CitationCard(citation: Citation) -> impl IntoView {
    let label = citation.source_label();
    let embed = citation.podcast_embed();
    let is_hbr = citation.is_hbr();

    view! {
        <div class="mb-8">
            <div class="text-[11px] opacity-50">{label}</div>
            <div class="mb-1">{citation.episode_title}</div>
            {citation
                .timestamp
                .map(|timestamp| {
                    view! { <div class="text-xs opacity-50 mb-2.5">{timestamp}</div> }
                })}
            {embed
                .map(|src| {
                    view! {
                        <iframe
                            class="border-0"
                            width="100%"
                            height="315"
                            src=src
                            allowfullscreen=""
                        ></iframe>
                    }
                })}
            // collapsed by default, independent of the HBR section filter
            {is_hbr
                .then(|| {
                    view! {
                        <details class="mt-2.5 text-[13px]">
                            <summary>"View Executive Brief"</summary>
                            <div class="mt-2.5 opacity-80">{citation.text}</div>
                        </details>
                    }
                })}
        </div>
    }
}
