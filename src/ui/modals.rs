use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

use crate::app::App;
use crate::data::Chain;
use crate::utils::{format_age, format_pct_change, format_price, format_usd};
use super::components::centered_rect;

pub fn render_details_modal(f: &mut Frame, app: &App) {
    let Some(token) = app.selected_token() else {
        return;
    };

    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let last_tick = match app.selected_observation() {
        Some(obs) => format!(
            "Last tick: {} (prev {})",
            format_pct_change(obs.previous_price, token.price),
            format_price(obs.previous_price)
        ),
        None => "Last tick: n/a".to_string(),
    };
    let breakdown = token.score_breakdown();

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(format!("{} ({})", token.name, token.symbol), bold)),
        Line::from(format!(
            "Chain: {} | Pair: {} | Stage: {}",
            token.chain, token.pair, token.stage
        )),
        Line::from(""),
        Line::from(format!("Price: {}", format_price(token.price))),
        Line::from(last_tick),
        Line::from(format!("Market Cap: {}", format_usd(token.market_cap))),
        Line::from(format!("24h Volume: {}", format_usd(token.volume_24h))),
        Line::from(format!("Liquidity: {}", format_usd(token.liquidity))),
        Line::from(format!("Launched: {} ago", format_age(token.launched_at))),
        Line::from(""),
        Line::from(Span::styled(format!("Score: {}/100", token.audit_score), bold)),
        Line::from(format!("  Liquidity lock (40%):  {:5.1}", breakdown.liquidity_lock)),
        Line::from(format!("  Community trust (30%): {:5.1}", breakdown.community_trust)),
        Line::from(format!("  Audit (30%):           {:5.1}", breakdown.audit)),
    ];

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default()
            .borders(Borders::ALL)
            .title("Token Details")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
    f.render_widget(modal, area);
}

/// Placeholder criteria only; nothing here feeds back into the pipeline.
pub fn render_filters_modal(f: &mut Frame, _app: &App) {
    let area = centered_rect(50, 50, f.area());
    f.render_widget(Clear, area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Chains", bold))];
    for chain in Chain::iter() {
        lines.push(Line::from(format!("  [x] {chain}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Minimum score", bold)));
    lines.push(Line::from("  0 [==========----------] 100"));

    let modal = Paragraph::new(lines)
        .block(Block::default()
            .borders(Borders::ALL)
            .title("Advanced Filters")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
    f.render_widget(modal, area);
}
