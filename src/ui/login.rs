//! Sign-in screen: a centered card gating the dashboard.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use callgrid_app::{AppState, LoginField};
use callgrid_ui::{centered_rect, with_margin, TextInput};

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 13;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme;
    let card = centered_rect(CARD_WIDTH.min(area.width), CARD_HEIGHT.min(area.height), area);
    // Nothing sensible fits on a terminal shorter than the card.
    if card.width < 24 || card.height < CARD_HEIGHT {
        return;
    }

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accented_fg))
        .style(Style::default().bg(theme.bg));
    frame.render_widget(block, card);

    let inner = with_margin(card, 1);
    let row = |offset: u16| Rect::new(inner.x, inner.y + offset, inner.width, 1);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "CALLGRID",
            Style::default()
                .fg(theme.accented_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        row(0),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "NEXUS outbound operations",
            Style::default().fg(theme.disabled),
        ))
        .alignment(Alignment::Center),
        row(1),
    );

    let email_focused = state.login.focus == LoginField::Email;
    render_field(frame, row(3), row(4), "Email", &state.login.email, email_focused, false, state);
    render_field(
        frame,
        row(6),
        row(7),
        "Password",
        &state.login.password,
        !email_focused,
        true,
        state,
    );

    // Validation message, or the key hint when there is none
    let message_area = row(9);
    match &state.login.error {
        Some(error) => frame.render_widget(
            Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(theme.error),
            ))
            .alignment(Alignment::Center),
            message_area,
        ),
        None => frame.render_widget(
            Paragraph::new(Span::styled(
                "Tab switches fields · Enter signs in",
                Style::default().fg(theme.disabled),
            ))
            .alignment(Alignment::Center),
            message_area,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn render_field(
    frame: &mut Frame,
    label_area: Rect,
    input_area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
    masked: bool,
    state: &AppState,
) {
    let theme = state.theme;

    let label_style = if focused {
        Style::default()
            .fg(theme.accented_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.disabled)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", label), label_style)),
        label_area,
    );

    let field = Rect::new(
        input_area.x + 1,
        input_area.y,
        input_area.width.saturating_sub(2),
        1,
    );
    let field_style = Style::default().fg(theme.fg).bg(theme.accented_bg);

    let shown = if masked {
        "•".repeat(input.text().chars().count())
    } else {
        input.text().to_string()
    };

    // Scroll long values so the cursor stays inside the field.
    let cursor_col = input.cursor_pos();
    let visible_width = field.width.saturating_sub(1) as usize;
    let skip = cursor_col.saturating_sub(visible_width);
    let shown: String = shown.chars().skip(skip).collect();

    frame.render_widget(
        Paragraph::new(Span::styled(shown, field_style)).style(field_style),
        field,
    );

    if focused {
        let cursor_x = field.x + (cursor_col - skip) as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(field.right()), field.y));
    }
}
