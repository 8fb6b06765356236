use alloy::primitives::U256;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::indexer::{parse_u64, Balance, Block, Code, CodeKind, Transaction};

/// Native token of the indexed chain
pub const NATIVE_SYMBOL: &str = "RSOL";

// ============================================================================
// Helper Functions
// ============================================================================

pub fn truncate_hash(hash: &str) -> String {
    if hash.len() > 20 && hash.is_ascii() {
        format!("{}...{}", &hash[..10], &hash[hash.len() - 6..])
    } else {
        hash.to_string()
    }
}

/// Pads or truncates to exactly `width` chars
pub fn fixed_width(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    } else {
        format!("{text:width$}")
    }
}

pub fn format_kv(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn format_kv_link(key: &str, value: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    };

    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), style),
    ])
}

pub fn format_timestamp(ts: u64) -> String {
    use std::time::{Duration, UNIX_EPOCH};
    if ts == 0 {
        return "unknown".to_string();
    }
    let datetime = UNIX_EPOCH + Duration::from_secs(ts);
    let secs_ago = std::time::SystemTime::now()
        .duration_since(datetime)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    if secs_ago < 60 {
        format!("{secs_ago} secs ago")
    } else if secs_ago < 3600 {
        format!("{} mins ago", secs_ago / 60)
    } else if secs_ago < 86400 {
        format!("{} hours ago", secs_ago / 3600)
    } else {
        format!("{} days ago", secs_ago / 86400)
    }
}

pub fn format_gas(gas: u64) -> String {
    if gas >= 1_000_000 {
        format!("{:.2}M", gas as f64 / 1_000_000.0)
    } else if gas >= 1_000 {
        format!("{:.2}K", gas as f64 / 1_000.0)
    } else {
        gas.to_string()
    }
}

/// Gas quantity as the indexer sends it, decimal or hex
pub fn format_gas_str(raw: &str) -> String {
    parse_u64(raw)
        .map(format_gas)
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_gwei(wei: u128) -> String {
    let gwei = wei as f64 / 1_000_000_000.0;
    if gwei >= 1.0 {
        format!("{gwei:.2} gwei")
    } else {
        format!("{gwei:.4} gwei")
    }
}

/// Gas price string in gwei, `N/A` when absent
pub fn format_gwei_str(raw: Option<&str>) -> String {
    match raw.and_then(parse_wei) {
        Some(wei) => format_gwei(wei.saturating_to::<u128>()),
        None => "N/A".to_string(),
    }
}

/// Parses a wei amount, decimal or `0x` hex
pub fn parse_wei(raw: &str) -> Option<U256> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<U256>().ok()
}

/// Wei rendered in whole native units with at most 4 decimals
pub fn format_native(raw: &str) -> String {
    let Some(wei) = parse_wei(raw) else {
        return if raw.is_empty() {
            format!("0 {NATIVE_SYMBOL}")
        } else {
            format!("{raw} {NATIVE_SYMBOL}")
        };
    };

    let unit = U256::from(10u64).pow(U256::from(18));
    let whole = wei / unit;
    let frac = (wei % unit).to_string();
    let frac = format!("{frac:0>18}");
    let frac = frac[..4].trim_end_matches('0');

    if frac.is_empty() {
        format!("{whole} {NATIVE_SYMBOL}")
    } else {
        format!("{whole}.{frac} {NATIVE_SYMBOL}")
    }
}

/// Exit code 0 is success
pub fn format_exit_code(tx: &Transaction) -> Span<'static> {
    if tx.succeeded() {
        Span::styled("✓ Success", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!("✗ Failed ({})", tx.exit_code),
            Style::default().fg(Color::Red),
        )
    }
}

pub fn code_kind_badge(kind: CodeKind) -> Span<'static> {
    let color = match kind {
        CodeKind::Eoa => Color::Gray,
        CodeKind::Erc20 => Color::Green,
        CodeKind::Erc721 => Color::Magenta,
        CodeKind::Erc1155 => Color::Blue,
        CodeKind::Unknown => Color::Yellow,
    };
    Span::styled(format!("[{}]", kind.as_str()), Style::default().fg(color))
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    }
}

fn sep() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(Color::DarkGray))
}

fn header(cells: Vec<String>) -> ListItem<'static> {
    let mut spans = Vec::new();
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            spans.push(sep());
        }
        spans.push(Span::styled(cell, Style::default().fg(Color::DarkGray)));
    }
    ListItem::new(Line::from(spans))
}

// ============================================================================
// List rows
// ============================================================================

pub fn format_tx_list_header() -> ListItem<'static> {
    header(vec![
        format!("{:>3} T {:<19}", "#", "Hash"),
        format!("{:^19}   {:^19}", "From", "To"),
        format!("{:>9}", "Block"),
        format!("{:>16}", "Value"),
        "Status".to_string(),
    ])
}

pub fn format_tx_list_item(index: usize, tx: &Transaction, selected: bool) -> ListItem<'static> {
    let to_display = if tx.is_contract_creation() {
        format!("{:>19}", "[Contract Create]")
    } else {
        fixed_width(&truncate_hash(tx.to.as_deref().unwrap_or("?")), 19)
    };
    let block = tx
        .block_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "—".to_string());
    let status = if tx.succeeded() { "✓" } else { "✗" };

    let line = Line::from(vec![
        Span::styled(format!("{index:>3} "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            tx.envelope_type().indicator(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(
            fixed_width(&truncate_hash(&tx.transaction_hash), 19),
            Style::default().fg(Color::White),
        ),
        sep(),
        Span::styled(
            fixed_width(&truncate_hash(&tx.from), 19),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" → ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            to_display,
            if tx.is_contract_creation() {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::Cyan)
            },
        ),
        sep(),
        Span::styled(format!("{block:>9}"), Style::default().fg(Color::Gray)),
        sep(),
        Span::styled(
            format!("{:>16}", format_native(&tx.value)),
            Style::default().fg(Color::Yellow),
        ),
        sep(),
        Span::styled(
            status,
            Style::default().fg(if tx.succeeded() {
                Color::Green
            } else {
                Color::Red
            }),
        ),
    ]);

    ListItem::new(line).style(row_style(selected))
}

pub fn format_block_list_header() -> ListItem<'static> {
    header(vec![
        format!("{:>10}", "Block"),
        format!("{:<19}", "Hash"),
        format!("{:<14}", "Age"),
        format!("{:>8}", "Gas Used"),
        "Beneficiary".to_string(),
    ])
}

pub fn format_block_list_item(block: &Block, selected: bool) -> ListItem<'static> {
    let line = Line::from(vec![
        Span::styled(
            format!("{:>10}", format!("#{}", block.block_number)),
            Style::default().fg(Color::White),
        ),
        sep(),
        Span::styled(
            fixed_width(&truncate_hash(&block.block_hash), 19),
            Style::default().fg(Color::Cyan),
        ),
        sep(),
        Span::styled(
            fixed_width(&format_timestamp(block.timestamp), 14),
            Style::default().fg(Color::Gray),
        ),
        sep(),
        Span::styled(
            format!("{:>8}", format_gas_str(&block.gas_used)),
            Style::default().fg(Color::Gray),
        ),
        sep(),
        Span::styled(
            truncate_hash(&block.beneficiary),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    ListItem::new(line).style(row_style(selected))
}

pub fn format_balance_list_header() -> ListItem<'static> {
    header(vec![
        format!("{:<42}", "Address"),
        format!("{:>20}", "Balance"),
        "Chain".to_string(),
    ])
}

pub fn format_balance_list_item(balance: &Balance, selected: bool) -> ListItem<'static> {
    let line = Line::from(vec![
        Span::styled(
            fixed_width(&balance.address, 42),
            Style::default().fg(Color::Cyan),
        ),
        sep(),
        Span::styled(
            format!("{:>20}", format_native(&balance.balance)),
            Style::default().fg(Color::Yellow),
        ),
        sep(),
        Span::styled(balance.chain_id.to_string(), Style::default().fg(Color::Gray)),
    ]);

    ListItem::new(line).style(row_style(selected))
}

pub fn format_code_list_header() -> ListItem<'static> {
    header(vec![
        format!("{:<42}", "Address"),
        format!("{:<18}", "Kind"),
        format!("{:<20}", "Name"),
        "Block".to_string(),
    ])
}

pub fn format_code_list_item(code: &Code, selected: bool) -> ListItem<'static> {
    let name = match (&code.name, &code.symbol) {
        (Some(name), Some(symbol)) => format!("{name} ({symbol})"),
        (Some(name), None) => name.clone(),
        (None, Some(symbol)) => symbol.clone(),
        (None, None) => "—".to_string(),
    };
    let badge = code_kind_badge(code.code_kind());
    let badge_width = badge.content.chars().count();

    let line = Line::from(vec![
        Span::styled(
            fixed_width(&code.address, 42),
            Style::default().fg(Color::Cyan),
        ),
        sep(),
        badge,
        Span::raw(" ".repeat(18usize.saturating_sub(badge_width))),
        sep(),
        Span::styled(fixed_width(&name, 20), Style::default().fg(Color::White)),
        sep(),
        Span::styled(
            format!("#{}", code.block_number),
            Style::default().fg(Color::Gray),
        ),
    ]);

    ListItem::new(line).style(row_style(selected))
}

// ============================================================================
// Layout
// ============================================================================

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let popup_layout = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(area);

    popup_layout[1]
}

pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical[1]);

    horizontal[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
