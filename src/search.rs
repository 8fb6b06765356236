//! Debounced incremental search across transactions and blocks.
//!
//! Input is classified by shape, matching lookups run in parallel, and each
//! fetch cycle carries a generation number so only the newest cycle's results
//! are ever shown.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::app::NavLink;
use crate::indexer::{
    Block, BlockCriteria, BlockKey, EntityQuerySource, Transaction, TxCriteria, PAGE_SIZE,
};

pub const DEBOUNCE: Duration = Duration::from_millis(300);

// ============================================================================
// Classification
// ============================================================================

/// "0x" followed by 64 more characters
pub fn is_possible_tx_hash(query: &str) -> bool {
    query.starts_with("0x") && query.chars().count() == 66
}

/// Any "0x"-prefixed input, or a decimal height
pub fn is_possible_block(query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    query.starts_with("0x") || query.chars().all(|c| c.is_ascii_digit())
}

/// Plain address shape: "0x" + 40 hex chars
pub fn is_address(query: &str) -> bool {
    query
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Which lookups an input triggers. Both may apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub tx_hash: bool,
    pub block: bool,
}

impl Classification {
    pub fn of(query: &str) -> Self {
        Self {
            tx_hash: is_possible_tx_hash(query),
            block: is_possible_block(query),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.tx_hash && !self.block
    }
}

/// Block reference parsed from search input: hex is a hash, digits a height
pub fn block_key(query: &str) -> Option<BlockKey> {
    if query.starts_with("0x") {
        Some(BlockKey::Hash(query.to_string()))
    } else if is_possible_block(query) {
        query.parse().ok().map(BlockKey::Number)
    } else {
        None
    }
}

/// Where committing a query with no results leads: a full hash opens the
/// transaction, an address its balance, anything else block-shaped the block.
pub fn direct_target(query: &str) -> Option<NavLink> {
    let query = query.trim();
    if is_possible_tx_hash(query) {
        Some(NavLink::Transaction(query.to_string()))
    } else if is_address(query) {
        Some(NavLink::Balance(query.to_string()))
    } else {
        block_key(query).map(NavLink::Block)
    }
}

// ============================================================================
// Results
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Transaction,
    Block,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transaction => "tx",
            Self::Block => "block",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: String,
    pub label: String,
    pub description: String,
    pub kind: ResultKind,
    pub target: NavLink,
}

/// `0x12345678…abcd` for anything longer than 16 chars
pub fn short_hash(hash: &str) -> String {
    if hash.len() > 16 && hash.is_ascii() {
        format!("{}…{}", &hash[..10], &hash[hash.len() - 4..])
    } else {
        hash.to_string()
    }
}

impl SearchResult {
    pub fn from_transaction(tx: &Transaction, query: &str) -> Self {
        let hash = if tx.transaction_hash.is_empty() {
            query
        } else {
            tx.transaction_hash.as_str()
        };

        Self {
            id: format!("tx-{hash}"),
            label: short_hash(hash),
            description: match tx.block_number {
                Some(number) => format!("Tx · Block {number}"),
                None => "Transaction".to_string(),
            },
            kind: ResultKind::Transaction,
            target: NavLink::Transaction(hash.to_string()),
        }
    }

    pub fn from_block(block: &Block) -> Self {
        let (id, label, target) = if block.block_hash.is_empty() {
            (
                format!("block-{}", block.block_number),
                format!("Block {}", block.block_number),
                NavLink::Block(BlockKey::Number(block.block_number)),
            )
        } else {
            (
                format!("block-{}", block.block_hash),
                short_hash(&block.block_hash),
                NavLink::Block(BlockKey::Hash(block.block_hash.clone())),
            )
        };

        Self {
            id,
            label,
            description: format!("Block #{}", block.block_number),
            kind: ResultKind::Block,
            target,
        }
    }
}

/// Runs every lookup the query's shape calls for, in parallel, and
/// concatenates transactions before blocks.
pub async fn lookup<S>(source: &S, chain_id: &str, query: &str) -> Vec<SearchResult>
where
    S: EntityQuerySource<Transaction> + EntityQuerySource<Block>,
{
    let class = Classification::of(query);

    let transactions = async {
        if !class.tx_hash {
            return Vec::new();
        }
        let criteria = TxCriteria::by_hash(chain_id, query);
        EntityQuerySource::<Transaction>::fetch_entities(source, &criteria).await
    };

    let blocks = async {
        let Some(key) = class.block.then(|| block_key(query)).flatten() else {
            return Vec::new();
        };
        let criteria = BlockCriteria::by_key(chain_id, key, PAGE_SIZE);
        EntityQuerySource::<Block>::fetch_entities(source, &criteria).await
    };

    let (transactions, blocks) = tokio::join!(transactions, blocks);

    transactions
        .iter()
        .map(|tx| SearchResult::from_transaction(tx, query))
        .chain(blocks.iter().map(SearchResult::from_block))
        .collect()
}

// ============================================================================
// Aggregator
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Debouncing { deadline: Instant },
    Fetching,
    Settled,
}

/// A fetch cycle ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
}

/// Search-as-you-type state: debounce timer, supersession and the keyboard
/// cursor over results. Time is passed in so the machine stays deterministic.
#[derive(Debug, Clone)]
pub struct SearchAggregator {
    query: String,
    state: SearchState,
    generation: u64,
    results: Vec<SearchResult>,
    selected: Option<usize>,
    open: bool,
    debounce: Duration,
}

impl Default for SearchAggregator {
    fn default() -> Self {
        Self::new(DEBOUNCE)
    }
}

impl SearchAggregator {
    pub fn new(debounce: Duration) -> Self {
        Self {
            query: String::new(),
            state: SearchState::Idle,
            generation: 0,
            results: Vec::new(),
            selected: None,
            open: false,
            debounce,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            SearchState::Debouncing { .. } | SearchState::Fetching
        )
    }

    /// Feeds the current text of the search field. Every call supersedes any
    /// cycle still in flight.
    pub fn on_input(&mut self, text: &str, now: Instant) {
        self.generation += 1;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.clear();
            return;
        }

        self.query = trimmed.to_string();
        self.state = SearchState::Debouncing {
            deadline: now + self.debounce,
        };
        self.open = true;
    }

    /// Fires the debounce timer if it is due
    pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        match self.state {
            SearchState::Debouncing { deadline } if now >= deadline => {
                self.state = SearchState::Fetching;
                Some(SearchRequest {
                    generation: self.generation,
                    query: self.query.clone(),
                })
            }
            _ => None,
        }
    }

    /// Applies a finished cycle. Results from superseded cycles are dropped.
    pub fn apply(&mut self, generation: u64, results: Vec<SearchResult>) -> bool {
        if generation != self.generation || self.state != SearchState::Fetching {
            debug!(
                generation,
                current = self.generation,
                "discarding superseded search results"
            );
            return false;
        }

        self.selected = if results.is_empty() { None } else { Some(0) };
        self.results = results;
        self.state = SearchState::Settled;
        true
    }

    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
    }

    pub fn select_prev(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Commits the highlighted result and closes the panel. Only settled
    /// results for the current query can be committed.
    pub fn commit(&mut self) -> Option<SearchResult> {
        if !self.open || self.state != SearchState::Settled {
            return None;
        }
        let chosen = self.selected.and_then(|i| self.results.get(i)).cloned()?;
        self.open = false;
        Some(chosen)
    }

    /// Hides the panel; the query text is left alone
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Empty input: drop results and close at once, no debounce
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = None;
        self.open = false;
        self.state = SearchState::Idle;
    }
}
