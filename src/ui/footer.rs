use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const FOCUS_HINT: &str = " ↑/↓ Tab: Focus";
const CONTROL_HINT: &str = "-/←: Decrement │ +/=/→: Increment";
const ACTION_HINT: &str = "r: Unknown action";
const QUIT_HINT: &str = "q: Quit";

/// Key hints for the focused panel, with the version right-aligned.
pub struct Footer {
    named_actions: bool,
}

impl Footer {
    /// `named_actions` adds the hint for the unknown-action key, which only
    /// does something on a counter that accepts named actions.
    pub fn new(named_actions: bool) -> Self {
        Self { named_actions }
    }

    pub fn hints(&self) -> String {
        let mut hints = vec![FOCUS_HINT, CONTROL_HINT];
        if self.named_actions {
            hints.push(ACTION_HINT);
        }
        hints.push(QUIT_HINT);
        hints.join(" │ ")
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{VERSION} ");

        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_hint_only_with_named_actions() {
        assert!(Footer::new(true).hints().contains("r: Unknown action"));
        assert!(!Footer::new(false).hints().contains("r:"));
    }

    #[test]
    fn hints_list_every_binding() {
        let hints = Footer::new(false).hints();
        for key in ["Tab", "-/←", "+/=/→", "q: Quit"] {
            assert!(hints.contains(key), "{key} missing from {hints}");
        }
    }
}
