//! Drawing the window from [`TasksApp`] state.

use super::app::{Focus, Modal, TasksApp};
use crate::libs::controller::TaskService;
use crate::libs::messages::Message;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 22;
const MAIN_BACKGROUND: Color = Color::Rgb(0x1E, 0x1E, 0x1E);
const TASK_BACKGROUND: Color = Color::Rgb(0x32, 0x32, 0x32);
const LISTS_BACKGROUND: Color = Color::Rgb(0x30, 0x2F, 0x2F);
const ENTRY_BACKGROUND: Color = Color::Rgb(0x26, 0x26, 0x26);
const PLACEHOLDER: Color = Color::Rgb(0xD5, 0xDC, 0xD6);
const FOCUSED: Color = Color::Yellow;

pub fn draw<S: TaskService>(f: &mut Frame, app: &TasksApp<S>) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(MAIN_BACKGROUND)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Sidebar and tasks
            Constraint::Length(3), // New list button and entry
            Constraint::Length(1), // Help
        ])
        .split(area);
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(rows[1]);

    draw_check_lists(f, main[0], app);
    draw_tasks(f, main[1], app);
    draw_new_list_button(f, bottom[0]);
    draw_entry(f, bottom[1], app);
    f.render_widget(
        Paragraph::new(Message::WindowHelp.to_string()).style(Style::default().fg(Color::DarkGray)),
        rows[2],
    );

    match app.modal() {
        Some(Modal::Error(message)) => draw_error(f, area, message),
        Some(Modal::NewList(field)) => draw_new_list_prompt(f, area, field.display_text(), field.is_placeholder()),
        None => {}
    }
}

fn pane_block(title: String, focused: bool, background: Color) -> Block<'static> {
    let border = if focused { FOCUSED } else { Color::Gray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(background).fg(Color::White))
}

fn draw_check_lists<S: TaskService>(f: &mut Frame, area: Rect, app: &TasksApp<S>) {
    let pane = app.lists();
    let items: Vec<ListItem> = pane.lists().iter().map(|list| ListItem::new(list.name.clone())).collect();
    let list = List::new(items)
        .block(pane_block(Message::ListsTitle.to_string(), app.focus() == Focus::Lists, LISTS_BACKGROUND))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));

    let mut state = ListState::default();
    if !pane.lists().is_empty() {
        state.select(Some(pane.selected_index()));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_tasks<S: TaskService>(f: &mut Frame, area: Rect, app: &TasksApp<S>) {
    let title = match app.lists().selected() {
        Some(list) => Message::TasksTitle(list.name.clone()).to_string(),
        None => Message::WindowTitle.to_string(),
    };
    let focused = app.focus() == Focus::Tasks;
    let block = pane_block(title, focused, MAIN_BACKGROUND);
    let pane = app.tasks();

    if pane.rows().is_empty() {
        let empty = Paragraph::new(Message::NoTasksInList.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = pane
        .rows()
        .iter()
        .map(|task| {
            let check = if task.done { "[x] " } else { "[ ] " };
            let mut spans = vec![Span::raw(check), Span::raw(task.description.clone())];
            if task.has_due_date() {
                spans.push(Span::styled(format!("  {}", task.due_date), Style::default().fg(Color::Cyan)));
            }
            let style = if task.done {
                Style::default().fg(Color::Gray).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style.bg(TASK_BACKGROUND))
        })
        .collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    // A fresh state each frame; ratatui scrolls it so the cursor stays visible
    let mut state = ListState::default().with_selected(Some(pane.cursor()));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_new_list_button(f: &mut Frame, area: Rect) {
    let button = Paragraph::new(format!("{}  (n)", Message::NewListButton))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White).bg(LISTS_BACKGROUND));
    f.render_widget(button, area);
}

fn draw_entry<S: TaskService>(f: &mut Frame, area: Rect, app: &TasksApp<S>) {
    let field = app.entry().field();
    let focused = app.focus() == Focus::Entry;
    let text_style = if field.is_placeholder() {
        Style::default().fg(PLACEHOLDER).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(Color::White)
    };
    let line = Line::from(vec![Span::raw("\u{FF0B} "), Span::styled(field.display_text().to_string(), text_style)]);
    let entry = Paragraph::new(line).block(pane_block(String::new(), focused, ENTRY_BACKGROUND));
    f.render_widget(entry, area);

    if focused && app.modal().is_none() {
        // "＋ " is three columns wide
        let x = area.x + 1 + 3 + field.text().chars().count() as u16;
        f.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_error(f: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(60, 7, area);
    f.render_widget(Clear, popup);

    let text = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled(Message::DismissHint.to_string(), Style::default().fg(Color::DarkGray))),
    ];
    let dialog = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Message::ErrorTitle.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().bg(ENTRY_BACKGROUND).fg(Color::White));
    f.render_widget(dialog, popup);
}

fn draw_new_list_prompt(f: &mut Frame, area: Rect, text: &str, placeholder: bool) {
    let popup = centered_rect(40, 3, area);
    f.render_widget(Clear, popup);

    let style = if placeholder {
        Style::default().fg(PLACEHOLDER)
    } else {
        Style::default().fg(Color::White)
    };
    let prompt = Paragraph::new(Span::styled(text.to_string(), style)).block(
        Block::default()
            .title(Message::NewListTitle.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(FOCUSED)),
    );
    f.render_widget(prompt.style(Style::default().bg(ENTRY_BACKGROUND)), popup);
}

/// A rectangle `width_percent` wide and `height` rows tall, centred in `area`.
fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let band = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height), Constraint::Fill(1)])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(band[1])[1]
}
