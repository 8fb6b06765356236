//! Paginated list UI tests

use super::*;
use ibex::app::Screen;

#[test]
fn test_block_list_shows_rows_and_pager() {
    let list = loaded_list(EntityKind::Block, || block_page(vec![mock_block()]));
    let app = create_test_app(Screen::List(list), true);
    let buffer = render_to_buffer(&app, 120, 30);

    assert!(buffer_contains(&buffer, "Blocks"));
    assert!(buffer_contains(&buffer, "#19000000"));
    assert!(buffer_contains(&buffer, "Page 1"));
    assert!(buffer_contains(&buffer, "← Previous"));
}

#[test]
fn test_list_title_names_the_chain() {
    let list = loaded_list(EntityKind::Block, || block_page(vec![mock_block()]));
    let app = create_test_app(Screen::List(list), true);
    let buffer = render_to_buffer(&app, 120, 30);

    assert!(buffer_contains(&buffer, &format!("chain {CHAIN}")));
}

#[test]
fn test_transaction_list_shows_value_and_status() {
    let list = loaded_list(EntityKind::Transaction, || {
        tx_page(vec![mock_tx(), mock_contract_creation()])
    });
    let app = create_test_app(Screen::List(list), true);
    let buffer = render_to_buffer(&app, 140, 30);

    assert!(buffer_contains(&buffer, "1.5 RSOL"));
    assert!(buffer_contains(&buffer, "[Contract Create]"));
    assert!(buffer_contains(&buffer, "✓"));
    assert!(buffer_contains(&buffer, "✗"));
}

#[test]
fn test_balance_list_shows_amounts() {
    let list = loaded_list(EntityKind::Balance, || balance_page(mock_balances()));
    let app = create_test_app(Screen::List(list), true);
    let buffer = render_to_buffer(&app, 120, 30);

    assert!(buffer_contains(&buffer, "0x1111111111111111111111111111111111111111"));
    assert!(buffer_contains(&buffer, "2.5 RSOL"));
}

#[test]
fn test_code_list_shows_kind_badge() {
    let list = loaded_list(EntityKind::Code, || code_page(vec![mock_code()]));
    let app = create_test_app(Screen::List(list), true);
    let buffer = render_to_buffer(&app, 140, 30);

    assert!(buffer_contains(&buffer, "[ERC20]"));
    assert!(buffer_contains(&buffer, "USD Coin (USDC)"));
}

#[test]
fn test_empty_list_shows_kind_message() {
    let list = loaded_list(EntityKind::Balance, || balance_page(vec![]));
    let app = create_test_app(Screen::List(list), true);
    let buffer = render_to_buffer(&app, 120, 30);

    assert!(buffer_contains(&buffer, "No balances found."));
}

#[test]
fn test_loading_list_shows_loading() {
    let (list, _request) = ListScreen::open(EntityKind::Transaction, CHAIN);
    let app = create_test_app(Screen::List(list), true);
    let buffer = render_to_buffer(&app, 120, 30);

    assert!(buffer_contains(&buffer, "Loading transactions..."));
    assert!(buffer_contains(&buffer, "(loading)"));
}

#[test]
fn test_list_shows_navigation_help() {
    let list = loaded_list(EntityKind::Block, || block_page(vec![mock_block()]));
    let app = create_test_app(Screen::List(list), true);
    let buffer = render_to_buffer(&app, 120, 30);

    assert!(buffer_contains(&buffer, "←→ page"));
}
