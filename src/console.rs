use std::collections::{HashSet, VecDeque};

use crate::model::AskResponse;
use crate::sections::{split_sections, SectionFilters};

pub const HISTORY_LIMIT: usize = 10;

pub const EXPANDED_GLYPH: &str = "−";
pub const COLLAPSED_GLYPH: &str = "+";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    QuestionChanged(String),
    Submit,
    Answered {
        question: String,
        response: AskResponse,
    },
    Failed,
    ToggleSection(String),
    ToggleIncludeHbr,
    ToggleBoardMode,
}

/// Side effects the view has to perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Ask(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// A section as it should appear on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub body: String,
    pub expanded: bool,
}

impl SectionView {
    pub fn glyph(&self) -> &'static str {
        if self.expanded {
            EXPANDED_GLYPH
        } else {
            COLLAPSED_GLYPH
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub question: String,
    pub response: Option<AskResponse>,
    pub loading: bool,
    // keyed by title: sections sharing a title open and close together
    pub expanded: HashSet<String>,
    pub history: VecDeque<String>,
    pub filters: SectionFilters,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else {
            Phase::Idle
        }
    }

    pub fn apply(&mut self, event: ConsoleEvent) -> Option<ConsoleCommand> {
        match event {
            ConsoleEvent::QuestionChanged(text) => {
                self.question = text;
                None
            }
            ConsoleEvent::Submit => {
                if self.question.trim().is_empty() {
                    return None;
                }
                self.loading = true;
                self.response = None;
                Some(ConsoleCommand::Ask(self.question.clone()))
            }
            ConsoleEvent::Answered { question, response } => {
                self.response = Some(response);
                self.remember(question);
                self.loading = false;
                None
            }
            ConsoleEvent::Failed => {
                self.response = Some(AskResponse::unavailable());
                self.loading = false;
                None
            }
            ConsoleEvent::ToggleSection(title) => {
                if !self.expanded.remove(&title) {
                    self.expanded.insert(title);
                }
                None
            }
            ConsoleEvent::ToggleIncludeHbr => {
                self.filters.include_hbr = !self.filters.include_hbr;
                None
            }
            ConsoleEvent::ToggleBoardMode => {
                self.filters.board_mode = !self.filters.board_mode;
                None
            }
        }
    }

    fn remember(&mut self, question: String) {
        self.history.push_front(question);
        self.history.truncate(HISTORY_LIMIT);
    }

    /// The answer text, if there is one worth a card.
    pub fn answer(&self) -> Option<&str> {
        self.response.as_ref().and_then(|r| r.answer.as_deref())
    }

    pub fn visible_sections(&self) -> Vec<SectionView> {
        let Some(answer) = self.answer() else {
            return Vec::new();
        };

        split_sections(answer)
            .into_iter()
            .filter(|section| self.filters.admits(&section.title))
            .map(|section| SectionView {
                expanded: self.expanded.contains(&section.title),
                title: section.title,
                body: section.body,
            })
            .collect()
    }
}
