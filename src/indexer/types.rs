use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::criteria::{
    BalanceCriteria, BlockCriteria, CodeCriteria, QueryCriteria, TxCriteria,
};
use super::helper::*;
use super::normalize::RecordShape;

// ============================================================================
// Entity Kinds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Transaction,
    Block,
    Balance,
    Code,
}

/// Wire renames applied to transaction records, backend name first
const TRANSACTION_RENAMES: &[(&str, &str)] = &[
    ("chain_id", "chainId"),
    ("transaction_hash", "transactionHash"),
    ("transaction_nonce", "transactionNonce"),
    ("block_hash", "blockHash"),
    ("block_number", "blockNumber"),
    ("transaction_index", "transactionIndex"),
    ("_from", "from"),
    ("_to", "to"),
    ("gas_price", "gasPrice"),
    ("transaction_type", "transactionType"),
    ("tx_type", "txType"),
    ("max_priority_fee_per_gas", "maxPriorityFeePerGas"),
    ("max_fee_per_gas", "maxFeePerGas"),
    ("solana_slot_number", "solanaSlotNumber"),
    ("tx_idx", "txIndex"),
    ("exit_code", "exitCode"),
];

const TRANSACTION_SHAPE: RecordShape = RecordShape {
    inner_key: Some("tx"),
    attachments: &[("solana_txn_mapping", "solanaTxnMappings")],
    renames: TRANSACTION_RENAMES,
};

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Transaction,
        EntityKind::Block,
        EntityKind::Balance,
        EntityKind::Code,
    ];

    /// Indexer endpoint path segment
    pub fn path(&self) -> &'static str {
        match self {
            Self::Transaction => "transactions",
            Self::Block => "blocks",
            Self::Balance => "balances",
            Self::Code => "codes",
        }
    }

    /// Envelope key that may wrap a single record
    pub fn unwrap_key(&self) -> &'static str {
        match self {
            Self::Transaction => "Transaction",
            Self::Block => "Block",
            Self::Balance => "Balance",
            Self::Code => "Code",
        }
    }

    /// Per-record reshaping after unwrap. Only transactions differ from the
    /// wire shape.
    pub fn shape(&self) -> &'static RecordShape {
        match self {
            Self::Transaction => &TRANSACTION_SHAPE,
            Self::Block | Self::Balance | Self::Code => &RecordShape::PASSTHROUGH,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Transaction => "Transactions",
            Self::Block => "Blocks",
            Self::Balance => "Balances",
            Self::Code => "Codes",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::Transaction => "No transactions available for the selected chain",
            Self::Block => "No blocks available for the selected chain",
            Self::Balance => "No balances found.",
            Self::Code => "No codes found.",
        }
    }
}

/// A normalized record fetched from one indexer endpoint
pub trait Entity: DeserializeOwned + Clone + Send + 'static {
    const KIND: EntityKind;

    type Criteria: QueryCriteria + Clone + Send + Sync + 'static;

    /// Criteria for one page of the latest records
    fn page_criteria(chain_id: &str, page_idx: u64) -> Self::Criteria;
}

// ============================================================================
// Transactions
// ============================================================================

/// EIP-2718 envelope type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    Legacy,     // Type 0
    AccessList, // Type 1 (EIP-2930)
    EIP1559,    // Type 2 (EIP-1559)
    Blob,       // Type 3 (EIP-4844)
    Unknown,
}

impl TxType {
    /// Parses the indexer's `transaction_type`, e.g. `"0x2"` or `"2"`
    pub fn parse(raw: &str) -> Self {
        match parse_u64(raw) {
            Some(0) => TxType::Legacy,
            Some(1) => TxType::AccessList,
            Some(2) => TxType::EIP1559,
            Some(3) => TxType::Blob,
            _ => TxType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Legacy => "Legacy (Type 0)",
            TxType::AccessList => "Access List (Type 1)",
            TxType::EIP1559 => "EIP-1559 (Type 2)",
            TxType::Blob => "Blob (Type 3)",
            TxType::Unknown => "Unknown",
        }
    }

    /// One-letter marker for list rows
    pub fn indicator(&self) -> &'static str {
        match self {
            TxType::Legacy => "L",
            TxType::AccessList => "A",
            TxType::EIP1559 => "2",
            TxType::Blob => "B",
            TxType::Unknown => "?",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolanaTxnMapping {
    #[serde(deserialize_with = "string_lenient")]
    pub evm_tx_hash: String,
    #[serde(deserialize_with = "string_lenient")]
    pub sol_signature: String,
    #[serde(deserialize_with = "u64_lenient")]
    pub slot_number: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    #[serde(deserialize_with = "u64_lenient")]
    pub chain_id: u64,
    #[serde(deserialize_with = "string_lenient")]
    pub transaction_hash: String,
    #[serde(deserialize_with = "string_lenient")]
    pub transaction_nonce: String,
    #[serde(deserialize_with = "opt_string_lenient")]
    pub block_hash: Option<String>,
    #[serde(deserialize_with = "opt_u64_lenient")]
    pub block_number: Option<u64>,
    #[serde(deserialize_with = "opt_u64_lenient")]
    pub transaction_index: Option<u64>,
    #[serde(deserialize_with = "string_lenient")]
    pub from: String,
    #[serde(deserialize_with = "opt_string_lenient")]
    pub to: Option<String>,
    #[serde(deserialize_with = "string_lenient")]
    pub value: String,
    #[serde(deserialize_with = "string_lenient")]
    pub gas: String,
    #[serde(deserialize_with = "opt_string_lenient")]
    pub gas_price: Option<String>,
    #[serde(deserialize_with = "string_lenient")]
    pub input: String,
    #[serde(deserialize_with = "string_lenient")]
    pub v: String,
    #[serde(deserialize_with = "string_lenient")]
    pub r: String,
    #[serde(deserialize_with = "string_lenient")]
    pub s: String,
    #[serde(deserialize_with = "string_lenient")]
    pub transaction_type: String,
    #[serde(deserialize_with = "string_lenient")]
    pub tx_type: String,
    #[serde(deserialize_with = "bool_lenient")]
    pub impersonated: bool,
    #[serde(deserialize_with = "opt_string_lenient")]
    pub max_priority_fee_per_gas: Option<String>,
    #[serde(deserialize_with = "opt_string_lenient")]
    pub max_fee_per_gas: Option<String>,
    #[serde(deserialize_with = "u64_lenient")]
    pub solana_slot_number: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub tx_index: u64,
    #[serde(deserialize_with = "i64_lenient")]
    pub exit_code: i64,
    #[serde(
        deserialize_with = "vec_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub solana_txn_mappings: Option<Vec<SolanaTxnMapping>>,
}

impl Transaction {
    pub fn envelope_type(&self) -> TxType {
        TxType::parse(&self.transaction_type)
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    pub fn is_contract_creation(&self) -> bool {
        self.to.as_deref().map_or(true, str::is_empty)
    }
}

impl Entity for Transaction {
    const KIND: EntityKind = EntityKind::Transaction;
    type Criteria = TxCriteria;

    fn page_criteria(chain_id: &str, page_idx: u64) -> TxCriteria {
        TxCriteria::latest_full(chain_id, page_idx)
    }
}

// ============================================================================
// Blocks
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    #[serde(deserialize_with = "u64_lenient")]
    pub chain_id: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub block_number: u64,
    #[serde(deserialize_with = "string_lenient")]
    pub block_hash: String,
    #[serde(deserialize_with = "string_lenient")]
    pub parent_hash: String,
    #[serde(deserialize_with = "string_lenient")]
    pub ommers_hash: String,
    #[serde(deserialize_with = "string_lenient")]
    pub beneficiary: String,
    #[serde(deserialize_with = "string_lenient")]
    pub state_root: String,
    #[serde(deserialize_with = "string_lenient")]
    pub transactions_root: String,
    #[serde(deserialize_with = "string_lenient")]
    pub receipts_root: String,
    #[serde(deserialize_with = "string_lenient")]
    pub logs_bloom: String,
    #[serde(deserialize_with = "string_lenient")]
    pub difficulty: String,
    #[serde(deserialize_with = "string_lenient")]
    pub gas_limit: String,
    #[serde(deserialize_with = "string_lenient")]
    pub gas_used: String,
    #[serde(deserialize_with = "u64_lenient")]
    pub timestamp: u64,
    #[serde(deserialize_with = "string_lenient")]
    pub extra_data: String,
    #[serde(deserialize_with = "string_lenient")]
    pub mix_hash: String,
    #[serde(deserialize_with = "string_lenient")]
    pub nonce: String,
    #[serde(
        deserialize_with = "opt_string_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_fee_per_gas: Option<String>,
}

impl Entity for Block {
    const KIND: EntityKind = EntityKind::Block;
    type Criteria = BlockCriteria;

    fn page_criteria(chain_id: &str, page_idx: u64) -> BlockCriteria {
        BlockCriteria::latest_page(chain_id, page_idx)
    }
}

// ============================================================================
// Balances
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    #[serde(deserialize_with = "u64_lenient")]
    pub chain_id: u64,
    #[serde(deserialize_with = "string_lenient")]
    pub address: String,
    /// Wei amount, decimal or 0x-hex
    #[serde(deserialize_with = "string_lenient")]
    pub balance: String,
}

impl Entity for Balance {
    const KIND: EntityKind = EntityKind::Balance;
    type Criteria = BalanceCriteria;

    fn page_criteria(chain_id: &str, page_idx: u64) -> BalanceCriteria {
        BalanceCriteria::latest_page(chain_id, page_idx)
    }
}

// ============================================================================
// Codes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Eoa,
    Erc20,
    Erc721,
    Erc1155,
    Unknown,
}

impl CodeKind {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "EOA" => Self::Eoa,
            "ERC20" => Self::Erc20,
            "ERC721" => Self::Erc721,
            "ERC1155" => Self::Erc1155,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eoa => "EOA",
            Self::Erc20 => "ERC20",
            Self::Erc721 => "ERC721",
            Self::Erc1155 => "ERC1155",
            Self::Unknown => "CONTRACT_UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Code {
    #[serde(deserialize_with = "u64_lenient")]
    pub chain_id: u64,
    #[serde(deserialize_with = "string_lenient")]
    pub address: String,
    #[serde(deserialize_with = "string_lenient")]
    pub code: String,
    #[serde(deserialize_with = "bool_lenient")]
    pub is_contract: bool,
    #[serde(deserialize_with = "string_lenient")]
    pub kind: String,
    #[serde(
        deserialize_with = "opt_string_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        deserialize_with = "opt_string_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub symbol: Option<String>,
    #[serde(
        deserialize_with = "opt_u8_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub decimals: Option<u8>,
    #[serde(deserialize_with = "u64_lenient")]
    pub block_number: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub updated_at_unix: u64,
}

impl Code {
    pub fn code_kind(&self) -> CodeKind {
        CodeKind::parse(&self.kind)
    }

    /// Bytecode length in bytes, from the hex string
    pub fn code_size(&self) -> usize {
        let hex = self.code.strip_prefix("0x").unwrap_or(&self.code);
        hex.len() / 2
    }
}

impl Entity for Code {
    const KIND: EntityKind = EntityKind::Code;
    type Criteria = CodeCriteria;

    fn page_criteria(chain_id: &str, page_idx: u64) -> CodeCriteria {
        CodeCriteria::latest_page(chain_id, page_idx)
    }
}
