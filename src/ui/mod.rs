mod account_page;
mod block_page;
mod helper;
mod list_page;
mod tx_page;

use account_page::{draw_balance_detail, draw_code_detail};
use block_page::draw_block_detail;
use helper::*;
use list_page::draw_list;
use tx_page::draw_tx_detail;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use tui_input::Input;

use crate::app::{App, HomeFocus, Screen, SECTIONS};
use crate::search::SearchState;

const TITLE_ART: &str = r#"
██╗██████╗ ███████╗██╗  ██╗
██║██╔══██╗██╔════╝╚██╗██╔╝
██║██████╔╝█████╗   ╚███╔╝
██║██╔══██╗██╔══╝   ██╔██╗
██║██████╔╝███████╗██╔╝ ██╗
╚═╝╚═════╝ ╚══════╝╚═╝  ╚═╝
"#;

const SUBTITLE: &str = "Terminal Indexer Explorer";

pub(crate) const NAV_HELP_SIMPLE: &str = "↑↓ navigate • Enter open • b back • h home • q quit";
pub(crate) const NAV_HELP_NO_LIST: &str = "b back • h home • q quit";
pub(crate) const NAV_HELP_LIST: &str =
    "↑↓ move • ←→ page • Enter open • b back • h home • q quit";

/// Visible rows of the results panel and the history list
const PANEL_ROWS: usize = 5;

pub fn draw(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Home => draw_home(frame, app),
        Screen::List(list) => draw_list(frame, list, app.chain_id()),
        Screen::TxDetail(detail) => draw_tx_detail(frame, detail),
        Screen::BlockDetail(detail) => draw_block_detail(frame, detail),
        Screen::BalanceDetail(detail) => draw_balance_detail(frame, detail),
        Screen::CodeDetail(detail) => draw_code_detail(frame, detail),
        Screen::Loading(msg) => draw_loading(frame, msg),
        Screen::NotFound(msg) => draw_not_found(frame, msg),
        Screen::Error(msg) => draw_error(frame, msg),
    }
}

fn draw_home(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.needs_indexer_setup() {
        draw_indexer_setup(frame, app, area);
    } else {
        draw_search_home(frame, app, area);
    }
}

fn draw_title(frame: &mut Frame, title_area: Rect, subtitle_area: Rect) {
    let title = Paragraph::new(TITLE_ART)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let subtitle = Paragraph::new(SUBTITLE)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, subtitle_area);
}

fn draw_indexer_setup(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(8), // Title
        Constraint::Length(1), // Subtitle
        Constraint::Length(3), // Spacing
        Constraint::Length(5), // Indexer input box
        Constraint::Length(1), // Status
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Help
        Constraint::Min(0),    // Padding
    ])
    .split(area);

    draw_title(frame, chunks[0], chunks[1]);

    let setup_area = centered_rect(70, chunks[3]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" ⚡ Indexer Configuration Required ")
        .title_style(Style::default().fg(Color::Yellow));

    let inner_area = block.inner(setup_area);
    frame.render_widget(block, setup_area);

    let input_chunks = Layout::vertical([
        Constraint::Length(1), // Label
        Constraint::Length(1), // Input
    ])
    .split(inner_area);

    let label = Paragraph::new("Enter the indexer base URL (e.g., https://indexer.example.com):")
        .style(Style::default().fg(Color::White));
    frame.render_widget(label, input_chunks[0]);

    draw_input_line(frame, &app.indexer_input, input_chunks[1], "https://...", true);

    if let Some(status) = &app.status {
        let status = Paragraph::new(status.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(status, chunks[4]);
    }

    let help = Paragraph::new("Press Enter to connect • Esc to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[6]);
}

/// Single-line input with placeholder and cursor
fn draw_input_line(frame: &mut Frame, input: &Input, area: Rect, placeholder: &str, focused: bool) {
    let scroll = input.visual_scroll(area.width as usize);

    let display_text = if input.value().is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input.value().to_string(), Style::default().fg(Color::White))
    };

    let paragraph = Paragraph::new(display_text).scroll((0, scroll as u16));
    frame.render_widget(paragraph, area);

    if focused {
        let cursor_x = area.x + (input.visual_cursor().saturating_sub(scroll)) as u16;
        if cursor_x < area.x + area.width {
            frame.set_cursor_position((cursor_x, area.y));
        }
    }
}

fn draw_search_home(frame: &mut Frame, app: &App, area: Rect) {
    let recent_searches = app.get_recent_searches();
    let panel_open = app.search.is_open();
    let show_history = !panel_open && !recent_searches.is_empty();

    let panel_height = if panel_open {
        (app.search.results().len().clamp(1, PANEL_ROWS) + 2) as u16
    } else if show_history {
        (recent_searches.len().min(PANEL_ROWS) + 2) as u16
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(8),            // Title
        Constraint::Length(1),            // Subtitle
        Constraint::Length(1),            // Spacing
        Constraint::Length(3),            // Search bar
        Constraint::Length(panel_height), // Results or history
        Constraint::Length(1),            // Spacing
        Constraint::Length(3),            // Sections
        Constraint::Length(3),            // Chain
        Constraint::Length(1),            // Indexer status
        Constraint::Length(1),            // Help
        Constraint::Min(0),               // Padding
    ])
    .split(area);

    draw_title(frame, chunks[0], chunks[1]);

    let search_focused = app.home_focus == HomeFocus::Search;
    let search_area = centered_rect(70, chunks[3]);
    draw_search_bar(frame, app, search_area, search_focused && app.selected_history_index.is_none());

    if panel_open {
        draw_results_panel(frame, app, centered_rect(70, chunks[4]));
    } else if show_history {
        draw_history_list(frame, app, centered_rect(70, chunks[4]));
    }

    draw_sections(frame, app, centered_rect(70, chunks[6]));
    draw_chain_box(frame, app, centered_rect(70, chunks[7]));

    let indexer_status = match (&app.status, app.indexer_url()) {
        (Some(status), _) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        )),
        (None, Some(url)) => Line::from(vec![
            Span::styled("Indexer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(truncate_display(url, 50), Style::default().fg(Color::Green)),
            Span::styled("  Chain: ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.chain_id().to_string(), Style::default().fg(Color::Green)),
        ]),
        (None, None) => Line::from(vec![
            Span::styled("Indexer: ", Style::default().fg(Color::DarkGray)),
            Span::styled("Not configured", Style::default().fg(Color::Yellow)),
        ]),
    };
    frame.render_widget(
        Paragraph::new(indexer_status).alignment(Alignment::Center),
        chunks[8],
    );

    let help_text = match app.home_focus {
        HomeFocus::Search if panel_open => "↑↓ results • Enter open • Esc close • Tab focus",
        HomeFocus::Search if show_history => {
            "Enter search • ↑↓ history • Del remove • Tab focus • Esc quit"
        }
        HomeFocus::Search => "Type to search • Enter open • Tab focus • Esc quit",
        HomeFocus::Sections => "←→ choose • Enter open • Tab focus • Esc back • q quit",
        HomeFocus::Chain => "Enter apply chain • Tab focus • Esc back",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[9]);
}

fn truncate_display(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect, selected: bool) {
    let border_color = if selected { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 🔍 Search ")
        .title_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    draw_input_line(
        frame,
        &app.search_input,
        inner,
        "Search by Txn Hash / Block / Address",
        selected,
    );
}

fn draw_results_panel(frame: &mut Frame, app: &App, area: Rect) {
    let search = &app.search;
    let title = if search.is_loading() {
        " Results · Searching... "
    } else {
        " Results "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    let results = search.results();
    if results.is_empty() {
        let message = match search.state() {
            SearchState::Settled => "No results",
            _ => "Searching...",
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let selected = search.selected().unwrap_or(0);
    let start = selected.saturating_sub(PANEL_ROWS - 1);

    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .skip(start)
        .take(PANEL_ROWS)
        .map(|(i, result)| {
            let is_selected = search.selected() == Some(i);
            let base = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<12}", result.kind.as_str()),
                    base.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<20}", result.label), base),
                Span::styled(format!(" {}", result.description), base),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_history_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Recent Searches ");

    let items: Vec<ListItem> = app
        .get_recent_searches()
        .iter()
        .enumerate()
        .take(PANEL_ROWS)
        .map(|(i, query)| {
            let style = if app.selected_history_index == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(format!(" {}", truncate_display(query, 60))).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_sections(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.home_focus == HomeFocus::Sections;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Browse ");

    let mut spans = Vec::new();
    for (i, kind) in SECTIONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if focused && i == app.selected_section {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if i == app.selected_section {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_chain_box(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.home_focus == HomeFocus::Chain;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" ⛓ Chain ID (current {}) ", app.chain_id()))
        .title_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    draw_input_line(frame, &app.chain_input, inner, "e.g. 121214", focused);
}

fn draw_loading(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Loading ");

    let spinner_frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let idx = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| (elapsed.as_millis() / 100) as usize)
        % spinner_frames.len();

    let text = format!("{} {}", spinner_frames[idx], msg);
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));

    let centered = centered_rect_fixed(50, 5, area);
    frame.render_widget(paragraph, centered);
}

fn draw_not_found(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Not Found ");

    let lines = vec![
        Line::from(msg.to_string()).fg(Color::Yellow),
        Line::from(""),
        Line::from(NAV_HELP_NO_LIST).fg(Color::DarkGray),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, centered_rect_fixed(70, 7, area));
}

fn draw_error(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let padded = padded_rect(area, 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" ❌ Error ");

    let mut lines: Vec<Line> = msg
        .lines()
        .map(|line| Line::from(line.to_string()).fg(Color::Red))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(NAV_HELP_NO_LIST).fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, padded);
}
