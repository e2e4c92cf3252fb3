use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use super::components::{render_footer, render_tab_bar};
use super::modals::{render_details_modal, render_filters_modal};
use super::table::render_token_table;

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Stage tabs
            Constraint::Min(10),   // Token table
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    let header = Paragraph::new("Tokenscope Real-time Token Screener")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_tab_bar(f, app, chunks[1]);

    if let Some(ref error) = app.error_message {
        // A load failure replaces the table body entirely; no retry.
        let error_block = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default()
                .borders(Borders::ALL)
                .title("Feed Error")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)));
        f.render_widget(error_block, chunks[2]);
    } else {
        render_token_table(f, app, chunks[2]);
    }

    render_footer(f, app, chunks[3]);

    // Modal overlays
    if app.show_details {
        render_details_modal(f, app);
    }
    if app.show_filters {
        render_filters_modal(f, app);
    }
}
