use super::helper::*;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::ListScreen;
use crate::indexer::{Entity, PAGE_SIZE};
use crate::pager::{PageCursor, PagedList};
use crate::ui::NAV_HELP_LIST;

pub fn draw_list(frame: &mut Frame, list: &ListScreen, chain_id: &str) {
    match list {
        ListScreen::Transactions(l) => {
            draw_paged(frame, l, chain_id, format_tx_list_header(), format_tx_list_item)
        }
        ListScreen::Blocks(l) => draw_paged(frame, l, chain_id, format_block_list_header(), |_, b, sel| {
            format_block_list_item(b, sel)
        }),
        ListScreen::Balances(l) => {
            draw_paged(frame, l, chain_id, format_balance_list_header(), |_, b, sel| {
                format_balance_list_item(b, sel)
            })
        }
        ListScreen::Codes(l) => draw_paged(frame, l, chain_id, format_code_list_header(), |_, c, sel| {
            format_code_list_item(c, sel)
        }),
    }
}

fn draw_paged<T, F>(
    frame: &mut Frame,
    list: &PagedList<T>,
    chain_id: &str,
    header: ListItem<'static>,
    row: F,
) where
    T: Entity,
    F: Fn(usize, &T, bool) -> ListItem<'static>,
{
    let area = padded_rect(frame.area(), 1);
    let kind = list.kind();
    let cursor = list.cursor();

    let chunks = Layout::vertical([
        Constraint::Min(5),    // Table
        Constraint::Length(1), // Pager
        Constraint::Length(1), // Nav help
    ])
    .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} · chain {chain_id} ", kind.label()));

    if list.is_loading() && list.rows().is_empty() {
        let loading = Paragraph::new(format!("Loading {}...", kind.label().to_lowercase()))
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(loading, chunks[0]);
    } else if list.rows().is_empty() {
        let empty = Paragraph::new(kind.empty_message())
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[0]);
    } else {
        // -2 borders, -1 header
        let visible_count = chunks[0].height.saturating_sub(3) as usize;
        let start = list.selected().saturating_sub(visible_count / 2);
        let offset = (cursor.current_page() * PAGE_SIZE) as usize;

        let mut items = vec![header];
        items.extend(
            list.rows()
                .iter()
                .enumerate()
                .skip(start)
                .take(visible_count)
                .map(|(i, item)| row(offset + i, item, i == list.selected())),
        );

        frame.render_widget(List::new(items).block(block), chunks[0]);
    }

    draw_pager(frame, chunks[1], cursor, list.is_loading());

    let help = Paragraph::new(NAV_HELP_LIST)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_pager(frame: &mut Frame, area: Rect, cursor: &PageCursor, loading: bool) {
    let enabled = Style::default().fg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled("← Previous", if cursor.has_prev() { enabled } else { disabled }),
        Span::styled(
            format!("   Page {}   ", cursor.current_page() + 1),
            Style::default().fg(Color::White),
        ),
        Span::styled("Next →", if cursor.has_more() { enabled } else { disabled }),
    ];
    if loading {
        spans.push(Span::styled("  (loading)", Style::default().fg(Color::Yellow)));
    }

    let pager = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(pager, area);
}
