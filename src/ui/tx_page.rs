use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::TxDetail;
use crate::indexer::TxType;
use crate::ui::NAV_HELP_SIMPLE;

pub fn draw_tx_detail(frame: &mut Frame, detail: &TxDetail) {
    let area = frame.area();
    let tx = &detail.tx;

    let chunks = Layout::vertical([
        Constraint::Min(20),   // Tx info
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let status = if tx.succeeded() { "✓ Success" } else { "✗ Failed" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📄 Transaction ({status}) "));

    let mut link_idx = 0;
    let envelope = tx.envelope_type();

    let mut lines = vec![
        format_kv("Hash", &tx.transaction_hash),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            format_exit_code(tx),
        ]),
        format_kv("Type", envelope.as_str()),
    ];

    if !tx.tx_type.is_empty() {
        lines.push(format_kv("Scope", &tx.tx_type));
    }

    // From (link 0)
    if !tx.from.is_empty() {
        lines.push(format_kv_link(
            "From",
            &tx.from,
            detail.selected_link == link_idx,
        ));
        link_idx += 1;
    }

    // To or contract creation
    if tx.is_contract_creation() {
        lines.push(format_kv("To", "Contract Creation"));
    } else if let Some(to) = &tx.to {
        lines.push(format_kv_link("To", to, detail.selected_link == link_idx));
        link_idx += 1;
    }

    lines.push(Line::from(""));
    lines.push(format_kv("Value", &format_native(&tx.value)));

    if matches!(envelope, TxType::EIP1559 | TxType::Blob) {
        lines.push(format_kv(
            "Max Fee",
            &format_gwei_str(tx.max_fee_per_gas.as_deref()),
        ));
        lines.push(format_kv(
            "Priority Fee",
            &format_gwei_str(tx.max_priority_fee_per_gas.as_deref()),
        ));
    }
    if tx.gas_price.is_some() {
        lines.push(format_kv("Gas Price", &format_gwei_str(tx.gas_price.as_deref())));
    }
    lines.push(format_kv("Gas Limit", &format_gas_str(&tx.gas)));

    lines.push(Line::from(""));
    lines.push(format_kv("Nonce", &tx.transaction_nonce));

    // Block (navigable link)
    match (tx.block_number, tx.block_hash.as_deref()) {
        (Some(number), _) => {
            lines.push(format_kv_link(
                "Block",
                &format!("#{number}"),
                detail.selected_link == link_idx,
            ));
        }
        (None, Some(hash)) if !hash.is_empty() => {
            lines.push(format_kv_link(
                "Block",
                &truncate_hash(hash),
                detail.selected_link == link_idx,
            ));
        }
        _ => lines.push(format_kv("Block", "Pending")),
    }

    if let Some(index) = tx.transaction_index {
        lines.push(format_kv("Position", &index.to_string()));
    }

    if tx.input.len() > 2 {
        let size = tx.input.trim_start_matches("0x").len() / 2;
        lines.push(format_kv("Input", &format!("{size} bytes")));
    }

    if tx.impersonated {
        lines.push(format_kv("Impersonated", "yes"));
    }

    // Solana settlement
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "── Solana ──",
        Style::default().fg(Color::Yellow),
    )]));
    lines.push(format_kv("Slot", &tx.solana_slot_number.to_string()));
    lines.push(format_kv("Index in Slot", &tx.tx_index.to_string()));

    match tx.solana_txn_mappings.as_deref() {
        Some(mappings) if !mappings.is_empty() => {
            for mapping in mappings {
                lines.push(Line::from(vec![
                    Span::styled("  Signature: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        truncate_hash(&mapping.sol_signature),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("  slot {}", mapping.slot_number),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
        }
        _ => lines.push(format_kv("Signatures", "none")),
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(NAV_HELP_SIMPLE)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}
