//! Balance and code pages, both keyed by account address.

use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{BalanceDetail, CodeDetail};
use crate::indexer::CodeKind;
use crate::ui::{NAV_HELP_NO_LIST, NAV_HELP_SIMPLE};

pub fn draw_balance_detail(frame: &mut Frame, detail: &BalanceDetail) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Min(8),    // Balance info
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 👤 Balance ");

    let mut lines = vec![format_kv("Address", &detail.address), Line::from("")];

    match detail.balances.first() {
        Some(current) => {
            lines.push(Line::from(vec![
                Span::styled("Balance: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format_native(&current.balance),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(format_kv("Chain", &current.chain_id.to_string()));
        }
        None => lines.push(format_kv("Balance", "No balances found.")),
    }

    // Further rows, e.g. the same address on other chains
    if detail.balances.len() > 1 {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            "── Other Records ──",
            Style::default().fg(Color::DarkGray),
        )]));
        for balance in detail.balances.iter().skip(1) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:>20} ", format_native(&balance.balance)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("chain {}", balance.chain_id),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(format_kv_link(
        "Code",
        "View contract code",
        detail.selected_link == 0,
    ));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(NAV_HELP_SIMPLE)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}

pub fn draw_code_detail(frame: &mut Frame, detail: &CodeDetail) {
    let area = frame.area();
    let code = &detail.code;
    let kind = code.code_kind();

    let chunks = Layout::vertical([
        Constraint::Min(10),   // Code info
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let title = if kind == CodeKind::Eoa || !code.is_contract {
        "Account"
    } else {
        "Contract"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📜 {title} "));

    let mut link_idx = 0;

    let mut lines = vec![
        format_kv("Address", &code.address),
        Line::from(vec![
            Span::styled("Kind: ", Style::default().fg(Color::DarkGray)),
            code_kind_badge(kind),
        ]),
    ];

    if let Some(name) = &code.name {
        lines.push(format_kv("Name", name));
    }
    if let Some(symbol) = &code.symbol {
        lines.push(format_kv("Symbol", symbol));
    }
    if let Some(decimals) = code.decimals {
        lines.push(format_kv("Decimals", &decimals.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(format_kv("Code Size", &format!("{} bytes", code.code_size())));

    if code.block_number > 0 {
        lines.push(format_kv_link(
            "Created in Block",
            &format!("#{}", code.block_number),
            detail.selected_link == link_idx,
        ));
        link_idx += 1;
    }
    if code.updated_at_unix > 0 {
        lines.push(format_kv("Updated", &format_timestamp(code.updated_at_unix)));
    }
    if !code.address.is_empty() {
        lines.push(format_kv_link(
            "Balance",
            "View balance",
            detail.selected_link == link_idx,
        ));
    }

    if !code.code.is_empty() {
        lines.push(Line::from(""));
        lines.push(format_kv("Bytecode", &truncate_hash(&code.code)));
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
