//! Query criteria and their compilation into indexer query strings.
//!
//! Every entity kind shares one shape: an identifier (how to find records),
//! a filter (how to scope them), optional extras and a result limit. The
//! compiler walks those groups in a fixed order so the same criteria always
//! produce the same string.

use std::fmt::Display;

/// Rows per page for paged listings. A page of exactly this many rows means
/// more may follow.
pub const PAGE_SIZE: u64 = 25;

/// Query used when the caller opted into a fallback and the criteria compiled
/// to nothing.
pub fn default_query(chain_id: &str) -> String {
    format!("chain_id={chain_id}&all=true&limit={PAGE_SIZE}&latest=true")
}

// ============================================================================
// Param Writer
// ============================================================================

/// Ordered `key=value` accumulator.
///
/// Values are interpolated as-is: callers pass hex hashes, addresses and
/// integers, none of which need URL encoding.
#[derive(Debug, Default)]
pub struct ParamWriter {
    parts: Vec<String>,
}

impl ParamWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `key=value` when the value is present and non-empty
    pub fn text(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.parts.push(format!("{key}={value}"));
        }
    }

    /// Emits `key=value` whenever the number is present, zero included
    pub fn number<N: Display>(&mut self, key: &str, value: Option<N>) {
        if let Some(value) = value {
            self.parts.push(format!("{key}={value}"));
        }
    }

    /// Emits `key=true` only for a set flag
    pub fn flag(&mut self, key: &str, value: bool) {
        if value {
            self.parts.push(format!("{key}=true"));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn finish(self) -> String {
        self.parts.join("&")
    }
}

/// A group of criteria fields that knows how to write itself.
pub trait ParamGroup {
    fn write_params(&self, out: &mut ParamWriter);
}

/// Anything that compiles to an indexer query string.
pub trait QueryCriteria {
    fn to_query(&self) -> String;
}

// ============================================================================
// Identifier
// ============================================================================

/// How records are located. Exactly one mode is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier<K> {
    /// No identification; the query is scoped by filters only
    Unset,
    /// The most recent records, optionally offset by page
    Latest { page_idx: Option<u64> },
    /// A single-record lookup by key
    Key(K),
}

impl<K> Default for Identifier<K> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<K: ParamGroup> ParamGroup for Identifier<K> {
    fn write_params(&self, out: &mut ParamWriter) {
        match self {
            Self::Unset => {}
            Self::Latest { page_idx } => {
                out.flag("latest", true);
                out.number("page_idx", *page_idx);
            }
            Self::Key(key) => key.write_params(out),
        }
    }
}

/// Transaction lookup key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxKey(pub String);

impl ParamGroup for TxKey {
    fn write_params(&self, out: &mut ParamWriter) {
        out.text("tx_hash", Some(&self.0));
    }
}

/// Block lookup key: height or hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKey {
    Number(u64),
    Hash(String),
}

impl ParamGroup for BlockKey {
    fn write_params(&self, out: &mut ParamWriter) {
        match self {
            Self::Number(number) => out.number("block_number", Some(number)),
            Self::Hash(hash) => out.text("block_hash", Some(hash)),
        }
    }
}

/// Account lookup key, used by balances and codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressKey(pub String);

impl ParamGroup for AddressKey {
    fn write_params(&self, out: &mut ParamWriter) {
        out.text("address", Some(&self.0));
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Filters that can be scoped to a chain
pub trait ChainScoped: Default {
    fn for_chain(chain_id: &str) -> Self;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainFilter {
    pub chain_id: Option<String>,
}

impl ChainScoped for ChainFilter {
    fn for_chain(chain_id: &str) -> Self {
        Self {
            chain_id: Some(chain_id.to_string()),
        }
    }
}

impl ParamGroup for ChainFilter {
    fn write_params(&self, out: &mut ParamWriter) {
        out.text("chain_id", self.chain_id.as_deref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxFilter {
    pub sender: Option<String>,
    pub status: Option<i16>,
    pub recipient: Option<String>,
    pub chain_id: Option<String>,
    pub tx_type: Option<String>,
    pub block_no: Option<u64>,
    pub block_hash: Option<String>,
}

impl ChainScoped for TxFilter {
    fn for_chain(chain_id: &str) -> Self {
        Self {
            chain_id: Some(chain_id.to_string()),
            ..Default::default()
        }
    }
}

impl ParamGroup for TxFilter {
    fn write_params(&self, out: &mut ParamWriter) {
        out.text("sender", self.sender.as_deref());
        out.number("status", self.status);
        out.text("recipient", self.recipient.as_deref());
        out.text("chain_id", self.chain_id.as_deref());
        out.text("tx_type", self.tx_type.as_deref());
        out.number("block_no", self.block_no);
        out.text("block_hash", self.block_hash.as_deref());
    }
}

// ============================================================================
// Extras
// ============================================================================

/// Placeholder for kinds without extra parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoExtras;

impl ParamGroup for NoExtras {
    fn write_params(&self, _out: &mut ParamWriter) {}
}

/// Which transaction set to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxScope {
    Native,
    All,
}

impl TxScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::All => "all",
        }
    }
}

/// Transaction response parts and scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxExtras {
    /// Return full transaction details
    pub all: bool,
    /// Return only a summary
    pub summary_only: bool,
    /// Emitted as a second `tx_type` parameter, after the filter's
    pub scope: Option<TxScope>,
}

impl ParamGroup for TxExtras {
    fn write_params(&self, out: &mut ParamWriter) {
        out.flag("all", self.all);
        out.flag("summary_only", self.summary_only);
        out.text("tx_type", self.scope.map(|s| s.as_str()));
    }
}

// ============================================================================
// Criteria
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limit {
    pub limit: Option<u64>,
}

impl Limit {
    pub fn of(limit: u64) -> Self {
        Self { limit: Some(limit) }
    }

    pub fn page() -> Self {
        Self::of(PAGE_SIZE)
    }
}

impl ParamGroup for Limit {
    fn write_params(&self, out: &mut ParamWriter) {
        out.number("limit", self.limit);
    }
}

/// A typed request descriptor for one entity kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria<I, F, X = NoExtras> {
    pub identifier: I,
    pub filter: F,
    pub extras: X,
    pub limit: Limit,
}

impl<I: ParamGroup, F: ParamGroup, X: ParamGroup> QueryCriteria for Criteria<I, F, X> {
    fn to_query(&self) -> String {
        let mut out = ParamWriter::new();
        self.identifier.write_params(&mut out);
        self.filter.write_params(&mut out);
        self.extras.write_params(&mut out);
        self.limit.write_params(&mut out);
        out.finish()
    }
}

impl<K, F: ChainScoped, X: Default> Criteria<Identifier<K>, F, X> {
    /// Latest records for a chain, one page at a time
    pub fn latest_page(chain_id: &str, page_idx: u64) -> Self {
        Self {
            identifier: Identifier::Latest {
                page_idx: Some(page_idx),
            },
            filter: F::for_chain(chain_id),
            extras: X::default(),
            limit: Limit::page(),
        }
    }

    /// Single-record lookup by key
    pub fn by_key(chain_id: &str, key: K, limit: u64) -> Self {
        Self {
            identifier: Identifier::Key(key),
            filter: F::for_chain(chain_id),
            extras: X::default(),
            limit: Limit::of(limit),
        }
    }
}

pub type TxCriteria = Criteria<Identifier<TxKey>, TxFilter, TxExtras>;
pub type BlockCriteria = Criteria<Identifier<BlockKey>, ChainFilter>;
pub type BalanceCriteria = Criteria<Identifier<AddressKey>, ChainFilter>;
pub type CodeCriteria = Criteria<Identifier<AddressKey>, ChainFilter>;

impl TxCriteria {
    /// Full-detail lookup of one transaction
    pub fn by_hash(chain_id: &str, hash: &str) -> Self {
        let mut criteria = Self::by_key(chain_id, TxKey(hash.to_string()), PAGE_SIZE);
        criteria.extras.all = true;
        criteria
    }

    /// Latest transactions of every type, with full details
    pub fn latest_full(chain_id: &str, page_idx: u64) -> Self {
        let mut criteria = Self::latest_page(chain_id, page_idx);
        criteria.extras.all = true;
        criteria.extras.scope = Some(TxScope::All);
        criteria
    }
}

impl BlockCriteria {
    pub fn by_number(chain_id: &str, number: u64, limit: u64) -> Self {
        Self::by_key(chain_id, BlockKey::Number(number), limit)
    }

    pub fn by_hash(chain_id: &str, hash: &str, limit: u64) -> Self {
        Self::by_key(chain_id, BlockKey::Hash(hash.to_string()), limit)
    }
}

impl Criteria<Identifier<AddressKey>, ChainFilter> {
    pub fn by_address(chain_id: &str, address: &str, limit: u64) -> Self {
        Self::by_key(chain_id, AddressKey(address.to_string()), limit)
    }
}
