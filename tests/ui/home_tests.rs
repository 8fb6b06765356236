//! Home screen UI tests

use super::*;
use ibex::app::{HomeFocus, Screen};
use ibex::search::SearchResult;
use std::time::{Duration, Instant};

/// Drives the search panel to a settled state with `results`
fn settle_search(app: &mut App, query: &str, results: Vec<SearchResult>) {
    let now = Instant::now();
    app.search.on_input(query, now);
    let request = app
        .search
        .poll(now + Duration::from_secs(1))
        .expect("debounce should fire");
    assert!(app.search.apply(request.generation, results));
}

#[test]
fn test_home_screen_shows_title() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "████"));
    assert!(buffer_contains(&buffer, "Terminal Indexer Explorer"));
}

#[test]
fn test_home_screen_shows_search_bar() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Search"));
    assert!(buffer_contains(&buffer, "Txn Hash / Block / Address"));
}

#[test]
fn test_home_screen_shows_recent_searches() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Recent Searches"));
    assert!(buffer_contains(&buffer, "12345678"));
}

#[test]
fn test_home_screen_shows_sections() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 80, 30);

    for label in ["Transactions", "Blocks", "Balances", "Codes"] {
        assert!(buffer_contains(&buffer, label), "missing section {label}");
    }
}

#[test]
fn test_home_screen_shows_indexer_and_chain() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "localhost:3000"));
    assert!(buffer_contains(&buffer, CHAIN));
}

#[test]
fn test_home_screen_no_indexer_shows_setup() {
    let app = create_test_app(Screen::Home, false);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Indexer Configuration Required"));
    assert!(buffer_contains(&buffer, "Enter to connect"));
}

#[test]
fn test_setup_shows_rejected_url_status() {
    let mut app = create_test_app(Screen::Home, false);
    app.status = Some("invalid indexer URL".to_string());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "invalid indexer URL"));
}

#[test]
fn test_search_panel_shows_results() {
    let mut app = create_test_app(Screen::Home, true);
    settle_search(&mut app, "19000000", vec![SearchResult::from_block(&mock_block())]);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Results"));
    assert!(buffer_contains(&buffer, "Block #19000000"));
    // Panel replaces the history list while open
    assert!(!buffer_contains(&buffer, "Recent Searches"));
}

#[test]
fn test_search_panel_while_debouncing() {
    let mut app = create_test_app(Screen::Home, true);
    app.search.on_input("123", Instant::now());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Searching..."));
}

#[test]
fn test_search_panel_no_results() {
    let mut app = create_test_app(Screen::Home, true);
    settle_search(&mut app, "0xdead", vec![]);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "No results"));
}

#[test]
fn test_sections_focus_changes_help() {
    let mut app = create_test_app(Screen::Home, true);
    app.home_focus = HomeFocus::Sections;
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "←→ choose"));
}
