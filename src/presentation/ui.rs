use crate::application::{App, FieldFocus, Screen};
use crate::domain::Item;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_HEIGHT: u16 = 4;
const CARD_SPACING: u16 = 1;

pub fn render_ui(f: &mut Frame, app: &App) {
    match app.navigator.current() {
        Screen::List => render_list_screen(f, app),
        Screen::Form => render_form_screen(f, app),
    }
}

fn render_list_screen(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new("jotlist | My List").style(Style::default().fg(Color::Cyan));
    f.render_widget(header, chunks[0]);

    if app.items.is_empty() {
        render_empty_state(f, chunks[1]);
    } else {
        render_item_cards(f, app, chunks[1]);
    }

    render_list_status_bar(f, app, chunks[2]);
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Items");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let message = Paragraph::new("No items yet. Press 'a' to add one.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

    // Center the message vertically within the body.
    let vertical_offset = inner.height / 2;
    let message_area = Rect {
        x: inner.x,
        y: inner.y + vertical_offset,
        width: inner.width,
        height: 1.min(inner.height),
    };
    f.render_widget(message, message_area);
}

fn render_item_cards(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Items ({})", app.items.len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut y = inner.y;
    for index in app.list_scroll..app.items.len() {
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }
        let card_area = Rect {
            x: inner.x + 1,
            y,
            width: inner.width.saturating_sub(2),
            height: CARD_HEIGHT,
        };
        if let Some(item) = app.items.get(index) {
            render_card(f, item, card_area);
        }
        y += CARD_HEIGHT + CARD_SPACING;
    }
}

fn render_card(f: &mut Frame, item: &Item, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            item.title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(item.note().to_string()),
    ];
    let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(card, area);
}

fn render_list_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref status) = app.status_message {
        status.clone()
    } else {
        "a/+: add item | Up/Down or j/k: scroll | q: quit".to_string()
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default());
    f.render_widget(status, area);
}

fn render_form_screen(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new("jotlist | Add Item").style(Style::default().fg(Color::Cyan));
    f.render_widget(header, chunks[0]);

    render_field(
        f,
        chunks[1],
        "Title",
        &app.form.title.text,
        app.form.title.cursor,
        app.form.focus == FieldFocus::Title,
    );
    render_field(
        f,
        chunks[2],
        "Note",
        &app.form.note.text,
        app.form.note.cursor,
        app.form.focus == FieldFocus::Note,
    );

    render_form_status_bar(f, app, chunks[4]);
}

fn render_field(f: &mut Frame, area: Rect, label: &str, text: &str, cursor: usize, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let field = Paragraph::new(text.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border_style),
    );
    f.render_widget(field, area);

    if focused {
        // Screen column is counted in chars, not bytes, and kept inside
        // the field's borders.
        let column = (text[..cursor].chars().count() as u16).min(area.width.saturating_sub(2));
        f.set_cursor_position((area.x + 1 + column, area.y + 1));
    }
}

fn render_form_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.form.can_save() {
        (
            "Enter: save | Esc: cancel | Tab: switch field",
            Style::default().fg(Color::Green),
        )
    } else {
        (
            "Enter: save (fill in both fields first) | Esc: cancel | Tab: switch field",
            Style::default().fg(Color::DarkGray),
        )
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}
