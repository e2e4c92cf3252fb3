use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, SortKey};
use crate::config::SKELETON_ROWS;
use crate::data::{TokenRecord, TrendDirection};
use crate::utils::{format_age, format_price, format_usd};

const COLUMN_WIDTHS: [Constraint; 10] = [
    Constraint::Min(13),    // Token
    Constraint::Length(9),  // Chain
    Constraint::Length(12), // Pair
    Constraint::Length(15), // Stage
    Constraint::Length(13), // Price
    Constraint::Length(9),  // Mkt Cap
    Constraint::Length(9),  // Volume
    Constraint::Length(10), // Liquidity
    Constraint::Length(5),  // Age
    Constraint::Length(7),  // Score
];

pub fn render_token_table(f: &mut Frame, app: &App, area: Rect) {
    if app.is_loading {
        render_skeleton(f, area);
        return;
    }

    if app.visible.is_empty() {
        let empty = Paragraph::new("No tokens match the current filter")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(table_title(app)));
        f.render_widget(empty, area);
        return;
    }

    let header_cells = SortKey::COLUMNS.iter().map(|key| {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        let label = if *key == app.sort.key {
            style = style.fg(Color::Yellow);
            format!("{} {}", key.label(), app.sort.direction.indicator())
        } else {
            key.label().to_string()
        };
        Cell::from(label).style(style)
    });
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    // Keep the selected row inside the scroll window
    let visible_height = area.height.saturating_sub(4) as usize;
    let scroll_offset = if visible_height > 0 && app.selected_row >= visible_height {
        app.selected_row - visible_height + 1
    } else {
        0
    };

    let rows = app
        .visible
        .iter()
        .skip(scroll_offset)
        .take(visible_height.max(1))
        .enumerate()
        .map(|(i, &token_idx)| {
            let token = &app.tokens[token_idx];
            let mut style = trend_style(app, token);
            if scroll_offset + i == app.selected_row {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            token_row(token, style)
        });

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(table_title(app)))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn table_title(app: &App) -> String {
    format!("Tokens ({} shown / {} total)", app.visible.len(), app.tokens.len())
}

/// Row color reflects the latest tick's movement until the highlight expires.
fn trend_style(app: &App, token: &TokenRecord) -> Style {
    match app.observations.get(&token.id) {
        Some(obs) if obs.is_fresh() => match obs.trend {
            TrendDirection::Up => Style::default().fg(Color::Green),
            TrendDirection::Down => Style::default().fg(Color::Red),
            TrendDirection::Flat => Style::default(),
        },
        _ => Style::default(),
    }
}

fn token_row<'a>(token: &'a TokenRecord, style: Style) -> Row<'a> {
    Row::new(vec![
        Cell::from(format!("{} ({})", token.name, token.symbol)),
        Cell::from(token.chain.to_string()),
        Cell::from(token.pair.clone()),
        Cell::from(token.stage.to_string()),
        Cell::from(format_price(token.price)),
        Cell::from(format_usd(token.market_cap)),
        Cell::from(format_usd(token.volume_24h)),
        Cell::from(format_usd(token.liquidity)),
        Cell::from(format_age(token.launched_at)),
        Cell::from(format!("{:>3}", token.audit_score)),
    ])
    .style(style)
}

fn render_skeleton(f: &mut Frame, area: Rect) {
    let rows = (0..SKELETON_ROWS).map(|_| {
        Row::new(
            SortKey::COLUMNS
                .iter()
                .map(|_| Cell::from("░░░░░░"))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().fg(Color::DarkGray))
    });

    let table = Table::new(rows, COLUMN_WIDTHS)
        .block(Block::default().borders(Borders::ALL).title("Tokens (loading...)"))
        .column_spacing(1);
    f.render_widget(table, area);
}
