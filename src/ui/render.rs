use crate::host::{ControlId, Mount};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, panel_rects};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, PENDING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new().widget(app.commit_mode(), app.root().pending()),
        header,
    );
    frame.render_widget(Clear, body);

    let panels = panel_rects(body, app.root().len());
    for (idx, (mount, rect)) in app.root().mounts().iter().zip(panels).enumerate() {
        if rect.height == 0 {
            continue;
        }
        frame.render_widget(counter_panel(mount, idx == app.focus()), rect);
    }

    let named_actions = app.focused().is_some_and(Mount::has_named_actions);
    frame.render_widget(Footer::new(named_actions).widget(footer), footer);
}

/// One bordered panel: heading label as title, controls around the display.
pub fn counter_panel(mount: &Mount, focused: bool) -> Paragraph<'static> {
    let view = mount.view();
    let text_style = Style::default().fg(HEADER_TEXT);
    let control_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(
            format!(" [ {} ] ", ControlId::Decrement.caption()),
            control_style,
        ),
        Span::styled(format!("  {}  ", view.display_text()), text_style),
        Span::styled(
            format!(" [ {} ] ", ControlId::Increment.caption()),
            control_style,
        ),
    ];
    let pending = mount.pending();
    if pending > 0 {
        spans.push(Span::styled(
            format!("  ({pending} queued)"),
            Style::default().fg(PENDING),
        ));
    }

    let (border, line_style) = if focused {
        (FOCUS_BORDER, Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        (GLOBAL_BORDER, Style::default())
    };

    Paragraph::new(Line::from(spans).style(line_style)).block(
        Block::default()
            .title(Span::styled(mount.label(), Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}
