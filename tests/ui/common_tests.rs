//! Common UI tests - error, loading, not found, layout, and navigation

use super::*;
use ibex::app::{BalanceDetail, BlockDetail, CodeDetail, Screen, TxDetail};

fn all_screens() -> Vec<Screen> {
    vec![
        Screen::Home,
        Screen::List(loaded_list(EntityKind::Block, || {
            block_page(vec![mock_block()])
        })),
        Screen::List(loaded_list(EntityKind::Transaction, || {
            tx_page(vec![mock_tx()])
        })),
        Screen::TxDetail(TxDetail {
            tx: mock_tx(),
            selected_link: 0,
        }),
        Screen::BlockDetail(BlockDetail {
            block: mock_block(),
            selected_link: 0,
        }),
        Screen::BalanceDetail(BalanceDetail {
            address: "0x1111111111111111111111111111111111111111".to_string(),
            balances: mock_balances(),
            selected_link: 0,
        }),
        Screen::CodeDetail(CodeDetail {
            code: mock_code(),
            selected_link: 0,
        }),
        Screen::NotFound("Block #7 not found".to_string()),
        Screen::Error("Error".to_string()),
        Screen::Loading("Loading...".to_string()),
    ]
}

// ==================== Error Screen Tests ====================

#[test]
fn test_error_screen_shows_message() {
    let screen = Screen::Error(
        "request to http://localhost:3000/blocks failed: connection refused\n\nIndexer: http://localhost:3000"
            .to_string(),
    );
    let app = create_test_app(screen, true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Error"));
    assert!(buffer_contains(&buffer, "connection refused"));
    assert!(buffer_contains(&buffer, "Indexer: http://localhost:3000"));
}

// ==================== Not Found Screen Tests ====================

#[test]
fn test_not_found_screen_shows_message() {
    let screen = Screen::NotFound("Block #7 not found on chain 121214".to_string());
    let app = create_test_app(screen, true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Not Found"));
    assert!(buffer_contains(&buffer, "Block #7 not found on chain 121214"));
    assert!(buffer_contains(&buffer, "b back"));
}

// ==================== Loading Screen Tests ====================

#[test]
fn test_loading_screen_shows_message() {
    let screen = Screen::Loading("Loading Block #19000000...".to_string());
    let app = create_test_app(screen, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Loading"));
    assert!(buffer_contains(&buffer, "Block #19000000"));
}

// ==================== Navigation Help Tests ====================

#[test]
fn test_screens_show_navigation_help() {
    for screen in all_screens() {
        if matches!(screen, Screen::Loading(_)) {
            continue;
        }
        let app = create_test_app(screen, true);
        let buffer = render_to_buffer(&app, 100, 40);

        assert!(
            buffer_contains(&buffer, "back")
                || buffer_contains(&buffer, "quit")
                || buffer_contains(&buffer, "Tab focus")
        );
    }
}

// ==================== Layout Tests ====================

#[test]
fn test_small_terminal_renders_without_panic() {
    for screen in all_screens() {
        let app = create_test_app(screen, true);
        let _ = render_to_buffer(&app, 40, 10);
    }
}

#[test]
fn test_large_terminal_renders_without_panic() {
    for screen in all_screens() {
        let app = create_test_app(screen, true);
        let _ = render_to_buffer(&app, 200, 100);
    }
}
