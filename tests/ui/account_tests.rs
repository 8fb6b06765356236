//! Balance and code page UI tests

use super::*;
use ibex::app::{BalanceDetail, CodeDetail, Screen};

fn balance_screen(balances: Vec<Balance>) -> Screen {
    Screen::BalanceDetail(BalanceDetail {
        address: "0x1111111111111111111111111111111111111111".to_string(),
        balances,
        selected_link: 0,
    })
}

fn code_screen(code: Code) -> Screen {
    Screen::CodeDetail(CodeDetail {
        code,
        selected_link: 0,
    })
}

// ==================== Balance ====================

#[test]
fn test_balance_screen_shows_address_and_amount() {
    let app = create_test_app(balance_screen(mock_balances()), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "0x1111111111111111111111111111111111111111"));
    assert!(buffer_contains(&buffer, "2.5 RSOL"));
}

#[test]
fn test_balance_screen_lists_other_records() {
    let app = create_test_app(balance_screen(mock_balances()), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Other Records"));
    assert!(buffer_contains(&buffer, "chain 1"));
}

#[test]
fn test_balance_screen_links_to_code() {
    let app = create_test_app(balance_screen(mock_balances()), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "View contract code"));
}

#[test]
fn test_balance_screen_without_rows() {
    let app = create_test_app(balance_screen(vec![]), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "No balances found."));
}

// ==================== Code ====================

#[test]
fn test_code_screen_shows_token_metadata() {
    let app = create_test_app(code_screen(mock_code()), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Contract"));
    assert!(buffer_contains(&buffer, "[ERC20]"));
    assert!(buffer_contains(&buffer, "Name: USD Coin"));
    assert!(buffer_contains(&buffer, "Symbol: USDC"));
    assert!(buffer_contains(&buffer, "Decimals: 6"));
}

#[test]
fn test_code_screen_shows_size_and_links() {
    let app = create_test_app(code_screen(mock_code()), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Code Size: 5 bytes"));
    assert!(buffer_contains(&buffer, "Created in Block: #6082465"));
    assert!(buffer_contains(&buffer, "View balance"));
}

#[test]
fn test_eoa_code_screen() {
    let code = Code {
        code: String::new(),
        is_contract: false,
        kind: "EOA".to_string(),
        name: None,
        symbol: None,
        decimals: None,
        block_number: 0,
        ..mock_code()
    };
    let app = create_test_app(code_screen(code), true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Account"));
    assert!(buffer_contains(&buffer, "[EOA]"));
    assert!(!buffer_contains(&buffer, "Created in Block"));
}
