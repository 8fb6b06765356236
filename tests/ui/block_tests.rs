//! Block page UI tests

use super::*;
use ibex::app::{BlockDetail, Screen};

fn block_screen(block: Block) -> Screen {
    Screen::BlockDetail(BlockDetail {
        block,
        selected_link: 0,
    })
}

#[test]
fn test_block_screen_shows_block_number() {
    let app = create_test_app(block_screen(mock_block()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Block #19000000"));
}

#[test]
fn test_block_screen_shows_beneficiary() {
    let app = create_test_app(block_screen(mock_block()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(
        &buffer,
        "Beneficiary: 0x95222290DD7278Aa3Ddd389Cc1E1d165CC4BAfe5"
    ));
}

#[test]
fn test_block_screen_shows_gas_usage() {
    let app = create_test_app(block_screen(mock_block()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "15.00M"));
    assert!(buffer_contains(&buffer, "30.00M"));
    assert!(buffer_contains(&buffer, "50.00%"));
    assert!(buffer_contains(&buffer, "30.00 gwei"));
}

#[test]
fn test_block_screen_shows_parent_link() {
    let app = create_test_app(block_screen(mock_block()), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Parent Block: 0xdef45678"));
}

#[test]
fn test_genesis_block_has_no_parent_link() {
    let genesis = Block {
        block_number: 0,
        ..mock_block()
    };
    let app = create_test_app(block_screen(genesis), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Parent Block: —"));
}

#[test]
fn test_block_screen_without_base_fee() {
    let block = Block {
        base_fee_per_gas: None,
        ..mock_block()
    };
    let app = create_test_app(block_screen(block), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Base Fee: N/A"));
}
