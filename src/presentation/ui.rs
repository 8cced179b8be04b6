use crate::application::{App, AppMode, Page, SubmissionStatus};
use super::pages::render_page;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let header_height = if app.header_compact() { 1 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_page(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut nav = vec![Span::styled(
        "♛ Nicholas",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    for page in Page::ALL {
        nav.push(Span::raw("  "));
        let style = if page == app.page {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        nav.push(Span::styled(page.title(), style));
    }

    if app.header_compact() {
        // Scrolled: condensed to one line on a solid background
        let header = Paragraph::new(Line::from(nav)).style(Style::default().bg(Color::DarkGray));
        f.render_widget(header, area);
    } else {
        let lines = vec![
            Line::from(Span::styled(
                "Your Time is Luxury. Let Us Handle the Rest.",
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )),
            Line::from(nav),
        ];
        let header = Paragraph::new(lines)
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(header, area);
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Browse => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else if app.current_status() == Some(SubmissionStatus::Submitting) {
                "Submitting... please wait".to_string()
            } else if app.current_form().is_some() {
                "↑↓: move | Enter: edit field / choose option / submit | Tab/1-6: pages | q: quit"
                    .to_string()
            } else {
                "↑↓/PgUp/PgDn: scroll | Tab/1-6: pages | q: quit".to_string()
            }
        }
        AppMode::EditField => {
            let label = app.focused_spec().map(|spec| spec.label).unwrap_or("field");
            format!("Editing {}: {} (Enter to save, Esc to cancel)", label, app.input)
        }
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Browse => match app.current_status() {
                Some(SubmissionStatus::Submitting) => Style::default().fg(Color::Yellow),
                Some(SubmissionStatus::Error) => Style::default().fg(Color::Red),
                _ => Style::default(),
            },
            AppMode::EditField => Style::default().fg(Color::Green),
        });
    f.render_widget(status, area);
}
