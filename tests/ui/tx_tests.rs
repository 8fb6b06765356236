//! Transaction page UI tests

use super::*;
use ibex::app::{Screen, TxDetail};

fn tx_screen(tx: Transaction, selected_link: usize) -> Screen {
    Screen::TxDetail(TxDetail { tx, selected_link })
}

#[test]
fn test_tx_screen_shows_hash_and_status() {
    let app = create_test_app(tx_screen(mock_tx(), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(
        &buffer,
        "0xaaaa111122223333444455556666777788889999aaaabbbbccccddddeeeeffff"
    ));
    assert!(buffer_contains(&buffer, "Success"));
}

#[test]
fn test_tx_screen_shows_addresses() {
    let app = create_test_app(tx_screen(mock_tx(), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "From: 0x1111111111111111111111111111111111111111"));
    assert!(buffer_contains(&buffer, "To: 0x2222222222222222222222222222222222222222"));
}

#[test]
fn test_tx_screen_shows_value_and_fees() {
    let app = create_test_app(tx_screen(mock_tx(), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "1.5 RSOL"));
    assert!(buffer_contains(&buffer, "100.00 gwei"));
    assert!(buffer_contains(&buffer, "2.00 gwei"));
    assert!(buffer_contains(&buffer, "EIP-1559") || buffer_contains(&buffer, "1559"));
}

#[test]
fn test_tx_screen_shows_block_link() {
    let app = create_test_app(tx_screen(mock_tx(), 2), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Block: #19000000"));
}

#[test]
fn test_tx_screen_shows_solana_settlement() {
    let app = create_test_app(tx_screen(mock_tx(), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Solana"));
    assert!(buffer_contains(&buffer, "Slot: 900"));
    assert!(buffer_contains(&buffer, "5xyzSignature"));
}

#[test]
fn test_tx_screen_contract_creation() {
    let app = create_test_app(tx_screen(mock_contract_creation(), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Contract Creation"));
    assert!(buffer_contains(&buffer, "Failed"));
}

#[test]
fn test_pending_tx_has_no_block_link() {
    let tx = Transaction {
        block_number: None,
        block_hash: None,
        ..mock_tx()
    };
    let app = create_test_app(tx_screen(tx, 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Block: Pending"));
}
