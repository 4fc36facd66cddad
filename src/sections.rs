//! Splits a free-text answer into numbered sections and decides which of
//! them the console shows.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    fn from_segment(segment: &str) -> Self {
        match segment.split_once('\n') {
            Some((title, body)) => Self {
                title: title.to_string(),
                body: body.to_string(),
            },
            None => Self {
                title: segment.to_string(),
                body: String::new(),
            },
        }
    }
}

// a newline followed by a single digit and a period opens a new section
fn opens_section(rest: &[u8]) -> bool {
    matches!(rest, [d, b'.', ..] if d.is_ascii_digit())
}

pub fn split_sections(answer: &str) -> Vec<Section> {
    let bytes = answer.as_bytes();
    let mut sections = Vec::new();
    let mut start = 0;

    for (i, b) in bytes.iter().enumerate() {
        if *b == b'\n' && opens_section(&bytes[i + 1..]) {
            sections.push(Section::from_segment(&answer[start..i]));
            start = i + 1;
        }
    }
    sections.push(Section::from_segment(&answer[start..]));

    sections
}

pub const EXECUTIVE_SUMMARY: &str = "Executive Summary";
pub const HBR_MARKER: &str = "HBR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionFilters {
    pub include_hbr: bool,
    pub board_mode: bool,
}

impl Default for SectionFilters {
    fn default() -> Self {
        Self {
            include_hbr: true,
            board_mode: false,
        }
    }
}

impl SectionFilters {
    /// Board mode is checked before the HBR filter, so an Executive Summary
    /// title mentioning HBR still shows in board mode unless HBR is off.
    pub fn admits(&self, title: &str) -> bool {
        if self.board_mode && !title.contains(EXECUTIVE_SUMMARY) {
            return false;
        }
        if !self.include_hbr && title.contains(HBR_MARKER) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, body: &str) -> Section {
        Section {
            title: title.into(),
            body: body.into(),
        }
    }

    #[test]
    fn splits_on_numbered_lines() {
        assert_eq!(
            split_sections("1. A\nfoo\n2. B\nbar"),
            vec![section("1. A", "foo"), section("2. B", "bar")]
        );
    }

    #[test]
    fn unnumbered_answer_is_one_title_only_section() {
        let text = "Plain answer with no sections";
        assert_eq!(split_sections(text), vec![section(text, "")]);
    }

    #[test]
    fn preamble_becomes_the_first_section() {
        let sections = split_sections("Overview\nintro line\n1. Executive Summary\ngrow");
        assert_eq!(
            sections,
            vec![
                section("Overview", "intro line"),
                section("1. Executive Summary", "grow"),
            ]
        );
    }

    #[test]
    fn multi_line_bodies_keep_their_newlines() {
        let sections = split_sections("1. A\nx\ny\n\n2. B");
        assert_eq!(sections, vec![section("1. A", "x\ny\n"), section("2. B", "")]);
    }

    #[test]
    fn only_single_digit_markers_open_sections() {
        let sections = split_sections("9. Nine\nbody\n10. Ten\nmore");
        assert_eq!(sections, vec![section("9. Nine", "body\n10. Ten\nmore")]);
    }

    #[test]
    fn digit_without_period_is_body_text() {
        let sections = split_sections("1. A\n2 items remain\n3) not a section");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "2 items remain\n3) not a section");
    }

    #[test]
    fn empty_answer_gives_one_empty_section() {
        assert_eq!(split_sections(""), vec![section("", "")]);
    }

    #[test]
    fn defaults_show_everything() {
        let filters = SectionFilters::default();
        assert!(filters.admits("1. Executive Summary"));
        assert!(filters.admits("3. HBR Perspective"));
        assert!(filters.admits("anything"));
    }

    #[test]
    fn board_mode_keeps_only_executive_summary() {
        let filters = SectionFilters {
            include_hbr: true,
            board_mode: true,
        };
        assert!(filters.admits("1. Executive Summary"));
        assert!(!filters.admits("2. Risks"));
        assert!(filters.admits("1. Executive Summary (HBR)"));
    }

    #[test]
    fn hbr_filter_hides_hbr_titles() {
        let filters = SectionFilters {
            include_hbr: false,
            board_mode: false,
        };
        assert!(!filters.admits("3. HBR Perspective"));
        assert!(filters.admits("2. Risks"));
    }

    #[test]
    fn hbr_filter_applies_after_board_mode() {
        let filters = SectionFilters {
            include_hbr: false,
            board_mode: true,
        };
        assert!(!filters.admits("1. Executive Summary (HBR)"));
        assert!(filters.admits("1. Executive Summary"));
        assert!(!filters.admits("3. HBR Perspective"));
    }
}
