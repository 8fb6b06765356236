use super::helper::*;

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::BlockDetail;
use crate::indexer::parse_u64;
use crate::ui::{NAV_HELP_NO_LIST, NAV_HELP_SIMPLE};

pub fn draw_block_detail(frame: &mut Frame, detail: &BlockDetail) {
    let area = frame.area();
    let info = &detail.block;
    let padded = padded_rect(area, 1);

    let chunks = Layout::vertical([
        Constraint::Min(10),   // Block info
        Constraint::Length(1), // Nav help
    ])
    .split(padded);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📦 Block #{} ", info.block_number));

    let mut link_idx = 0;

    let mut lines = vec![format_kv("Hash", &info.block_hash)];

    if detail.has_parent() {
        lines.push(format_kv_link(
            "Parent Block",
            &truncate_hash(&info.parent_hash),
            detail.selected_link == link_idx,
        ));
        link_idx += 1;
    } else {
        lines.push(format_kv("Parent Block", "—"));
    }

    lines.push(format_kv("Timestamp", &format_timestamp(info.timestamp)));

    if info.beneficiary.is_empty() {
        lines.push(format_kv("Beneficiary", "—"));
    } else {
        lines.push(format_kv_link(
            "Beneficiary",
            &info.beneficiary,
            detail.selected_link == link_idx,
        ));
    }
    lines.push(Line::from(""));

    // Gas usage with a fill bar
    let gas_used = parse_u64(&info.gas_used).unwrap_or(0);
    let gas_limit = parse_u64(&info.gas_limit).unwrap_or(0);
    let gas_pct = if gas_limit > 0 {
        (gas_used as f64 / gas_limit as f64) * 100.0
    } else {
        0.0
    };
    let bar_width = 20;
    let filled = (((gas_pct / 100.0) * bar_width as f64) as usize).min(bar_width);
    let gas_bar = format!(
        "[{}{}] {:.2}%",
        "█".repeat(filled),
        "░".repeat(bar_width - filled),
        gas_pct
    );

    lines.push(Line::from(vec![
        Span::styled("Gas Used: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format_gas(gas_used), Style::default().fg(Color::White)),
        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
        Span::styled(format_gas(gas_limit), Style::default().fg(Color::White)),
        Span::styled(
            format!("  {gas_bar}"),
            Style::default().fg(if gas_pct > 90.0 {
                Color::Red
            } else if gas_pct > 70.0 {
                Color::Yellow
            } else {
                Color::Green
            }),
        ),
    ]));
    lines.push(format_kv(
        "Base Fee",
        &format_gwei_str(info.base_fee_per_gas.as_deref()),
    ));

    lines.push(Line::from(""));
    lines.push(format_kv("State Root", &truncate_hash(&info.state_root)));
    lines.push(format_kv(
        "Transactions Root",
        &truncate_hash(&info.transactions_root),
    ));
    lines.push(format_kv("Receipts Root", &truncate_hash(&info.receipts_root)));

    if !info.difficulty.is_empty() {
        lines.push(format_kv("Difficulty", &info.difficulty));
    }
    if !info.nonce.is_empty() {
        lines.push(format_kv("Nonce", &info.nonce));
    }
    if info.extra_data.len() > 2 {
        lines.push(format_kv("Extra Data", &truncate_hash(&info.extra_data)));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, chunks[0]);

    let nav_help = if detail.links().is_empty() {
        NAV_HELP_NO_LIST
    } else {
        NAV_HELP_SIMPLE
    };
    let help = Paragraph::new(nav_help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}
