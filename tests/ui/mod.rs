//! UI rendering tests for ibex
//!
//! These tests render screens into a test backend and search the buffer.
//! Run with: cargo test --test ui_tests

pub mod account_tests;
pub mod block_tests;
pub mod common_tests;
pub mod home_tests;
pub mod list_tests;
pub mod tx_tests;

use ibex::app::{App, ListScreen, PageLoad, Screen};
use ibex::config::Config;
use ibex::indexer::{Balance, Block, Code, EntityKind, SolanaTxnMapping, Transaction};
use ibex::pager::PageResult;
use ibex::ui::draw;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::path::PathBuf;

pub const CHAIN: &str = "121214";

// ==================== Test Data Builders ====================

fn temp_config_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("ibex-ui-test-{}", std::process::id()))
        .join("config.toml")
}

pub fn mock_config() -> Config {
    let mut config = Config::default().with_path(temp_config_path());
    config.indexer_url = Some("http://localhost:3000".to_string());
    config.recent_searches = vec![
        "0x1234567890abcdef1234567890abcdef12345678".to_string(),
        "12345678".to_string(),
    ];
    config
}

pub fn mock_config_no_indexer() -> Config {
    Config::default().with_path(temp_config_path())
}

pub fn mock_tx() -> Transaction {
    Transaction {
        chain_id: 121214,
        transaction_hash: "0xaaaa111122223333444455556666777788889999aaaabbbbccccddddeeeeffff"
            .to_string(),
        transaction_nonce: "42".to_string(),
        block_hash: Some(
            "0xabc123def456789abc123def456789abc123def456789abc123def456789abcd".to_string(),
        ),
        block_number: Some(19000000),
        transaction_index: Some(5),
        from: "0x1111111111111111111111111111111111111111".to_string(),
        to: Some("0x2222222222222222222222222222222222222222".to_string()),
        value: "1500000000000000000".to_string(), // 1.5 RSOL
        gas: "100000".to_string(),
        max_fee_per_gas: Some("100000000000".to_string()),
        max_priority_fee_per_gas: Some("2000000000".to_string()),
        input: "0xa9059cbb".to_string(),
        transaction_type: "0x2".to_string(),
        tx_type: "native".to_string(),
        solana_slot_number: 900,
        tx_index: 3,
        exit_code: 0,
        solana_txn_mappings: Some(vec![SolanaTxnMapping {
            evm_tx_hash: "0xaaaa".to_string(),
            sol_signature: "5xyzSignature".to_string(),
            slot_number: 900,
        }]),
        ..Default::default()
    }
}

pub fn mock_contract_creation() -> Transaction {
    Transaction {
        to: None,
        exit_code: 1,
        ..mock_tx()
    }
}

pub fn mock_block() -> Block {
    Block {
        chain_id: 121214,
        block_number: 19000000,
        block_hash: "0xabc123def456789abc123def456789abc123def456789abc123def456789abcd".to_string(),
        parent_hash: "0xdef456789abc123def456789abc123def456789abc123def456789abc123def4"
            .to_string(),
        beneficiary: "0x95222290DD7278Aa3Ddd389Cc1E1d165CC4BAfe5".to_string(),
        state_root: "0x1111111111111111111111111111111111111111111111111111111111111111"
            .to_string(),
        transactions_root: "0x3333333333333333333333333333333333333333333333333333333333333333"
            .to_string(),
        receipts_root: "0x2222222222222222222222222222222222222222222222222222222222222222"
            .to_string(),
        gas_limit: "30000000".to_string(),
        gas_used: "15000000".to_string(),
        timestamp: 1700000000,
        base_fee_per_gas: Some("30000000000".to_string()),
        ..Default::default()
    }
}

pub fn mock_balances() -> Vec<Balance> {
    vec![
        Balance {
            chain_id: 121214,
            address: "0x1111111111111111111111111111111111111111".to_string(),
            balance: "2500000000000000000".to_string(), // 2.5 RSOL
        },
        Balance {
            chain_id: 1,
            address: "0x1111111111111111111111111111111111111111".to_string(),
            balance: "0".to_string(),
        },
    ]
}

pub fn mock_code() -> Code {
    Code {
        chain_id: 121214,
        address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
        code: "0x6080604052".to_string(),
        is_contract: true,
        kind: "ERC20".to_string(),
        name: Some("USD Coin".to_string()),
        symbol: Some("USDC".to_string()),
        decimals: Some(6),
        block_number: 6082465,
        updated_at_unix: 1700000000,
    }
}

/// A list of `kind` with its first page applied
pub fn loaded_list(kind: EntityKind, load: impl FnOnce() -> PageLoad) -> ListScreen {
    let (mut list, _) = ListScreen::open(kind, CHAIN);
    list.apply(load());
    list
}

pub fn tx_page(rows: Vec<Transaction>) -> PageLoad {
    PageLoad::Transactions(PageResult {
        chain_id: CHAIN.to_string(),
        page: 0,
        rows,
    })
}

pub fn block_page(rows: Vec<Block>) -> PageLoad {
    PageLoad::Blocks(PageResult {
        chain_id: CHAIN.to_string(),
        page: 0,
        rows,
    })
}

pub fn balance_page(rows: Vec<Balance>) -> PageLoad {
    PageLoad::Balances(PageResult {
        chain_id: CHAIN.to_string(),
        page: 0,
        rows,
    })
}

pub fn code_page(rows: Vec<Code>) -> PageLoad {
    PageLoad::Codes(PageResult {
        chain_id: CHAIN.to_string(),
        page: 0,
        rows,
    })
}

pub fn create_test_app(screen: Screen, with_indexer: bool) -> App {
    let config = if with_indexer {
        mock_config()
    } else {
        mock_config_no_indexer()
    };
    let mut app = App::new(config);
    app.screen = screen;
    app
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push(
                buffer
                    .cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
#[allow(dead_code)]
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
