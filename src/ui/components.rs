use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, StageTab};
use crate::app::sorting::stage_count;

pub fn render_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = StageTab::ALL
        .iter()
        .map(|tab| format!("{} ({})", tab.label(), stage_count(&app.tokens, *tab)))
        .collect();
    let selected = StageTab::ALL
        .iter()
        .position(|tab| *tab == app.stage_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Stages"))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .select(selected)
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let footer_text = if app.modal_open() {
        "Esc: Close | q: Quit".to_string()
    } else {
        format!(
            "◄►/hl: Stage tab | ↑↓/kj: Row | s/S: Sort column | d: Direction | Enter: Details | f: Filters | q: Quit [{} {}]",
            app.sort.key.label(),
            app.sort.direction.indicator()
        )
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
