use crate::config::Config;
use crate::indexer::{
    format_error_chain, Balance, BalanceCriteria, Block, BlockCriteria, BlockKey, Code,
    CodeCriteria, EntityKind, EntityQuerySource, FetchError, IndexerClient, Transaction,
    TxCriteria, PAGE_SIZE,
};
use crate::pager::{load_page, PageRequest, PageResult, PagedList};
use crate::search::{direct_target, short_hash, SearchAggregator};
use std::time::Instant;
use tui_input::Input;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    List(ListScreen),
    TxDetail(TxDetail),
    BlockDetail(BlockDetail),
    BalanceDetail(BalanceDetail),
    CodeDetail(CodeDetail),
    Loading(String),
    NotFound(String),
    Error(String),
}

/// Navigable links from a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavLink {
    Transaction(String),
    Block(BlockKey),
    Balance(String),
    Code(String),
}

impl NavLink {
    pub fn describe(&self) -> String {
        match self {
            NavLink::Transaction(hash) => format!("Transaction {}", short_hash(hash)),
            NavLink::Block(BlockKey::Number(number)) => format!("Block #{number}"),
            NavLink::Block(BlockKey::Hash(hash)) => format!("Block {}", short_hash(hash)),
            NavLink::Balance(address) => format!("Balance of {}", short_hash(address)),
            NavLink::Code(address) => format!("Code at {}", short_hash(address)),
        }
    }
}

/// Home screen focus, cycled with Tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    Search,
    Sections,
    Chain,
}

pub const SECTIONS: [EntityKind; 4] = EntityKind::ALL;

// ============================================================================
// Detail screens
// ============================================================================

#[derive(Debug, Clone)]
pub struct TxDetail {
    pub tx: Transaction,
    pub selected_link: usize, // from, to, block
}

impl TxDetail {
    pub fn links(&self) -> Vec<NavLink> {
        let mut links = Vec::new();
        if !self.tx.from.is_empty() {
            links.push(NavLink::Balance(self.tx.from.clone()));
        }
        if let Some(to) = self.tx.to.as_deref().filter(|to| !to.is_empty()) {
            links.push(NavLink::Balance(to.to_string()));
        }
        if let Some(number) = self.tx.block_number {
            links.push(NavLink::Block(BlockKey::Number(number)));
        } else if let Some(hash) = self.tx.block_hash.as_deref().filter(|h| !h.is_empty()) {
            links.push(NavLink::Block(BlockKey::Hash(hash.to_string())));
        }
        links
    }
}

#[derive(Debug, Clone)]
pub struct BlockDetail {
    pub block: Block,
    pub selected_link: usize, // parent, beneficiary
}

impl BlockDetail {
    pub fn has_parent(&self) -> bool {
        self.block.block_number > 0 && !self.block.parent_hash.is_empty()
    }

    pub fn links(&self) -> Vec<NavLink> {
        let mut links = Vec::new();
        if self.has_parent() {
            links.push(NavLink::Block(BlockKey::Hash(self.block.parent_hash.clone())));
        }
        if !self.block.beneficiary.is_empty() {
            links.push(NavLink::Balance(self.block.beneficiary.clone()));
        }
        links
    }
}

#[derive(Debug, Clone)]
pub struct BalanceDetail {
    pub address: String,
    pub balances: Vec<Balance>,
    pub selected_link: usize, // code
}

impl BalanceDetail {
    pub fn links(&self) -> Vec<NavLink> {
        vec![NavLink::Code(self.address.clone())]
    }
}

#[derive(Debug, Clone)]
pub struct CodeDetail {
    pub code: Code,
    pub selected_link: usize, // creation block, balance
}

impl CodeDetail {
    pub fn links(&self) -> Vec<NavLink> {
        let mut links = Vec::new();
        if self.code.block_number > 0 {
            links.push(NavLink::Block(BlockKey::Number(self.code.block_number)));
        }
        if !self.code.address.is_empty() {
            links.push(NavLink::Balance(self.code.address.clone()));
        }
        links
    }
}

fn cycle_forward(selected: &mut usize, len: usize) {
    if len > 0 {
        *selected = (*selected + 1) % len;
    }
}

fn cycle_back(selected: &mut usize, len: usize) {
    if len > 0 {
        *selected = if *selected == 0 { len - 1 } else { *selected - 1 };
    }
}

// ============================================================================
// List screens
// ============================================================================

#[derive(Debug, Clone)]
pub enum ListScreen {
    Transactions(PagedList<Transaction>),
    Blocks(PagedList<Block>),
    Balances(PagedList<Balance>),
    Codes(PagedList<Code>),
}

/// A page fetch for one of the lists
#[derive(Debug, Clone)]
pub enum ListRequest {
    Transactions(PageRequest<Transaction>),
    Blocks(PageRequest<Block>),
    Balances(PageRequest<Balance>),
    Codes(PageRequest<Code>),
}

#[derive(Debug, Clone)]
pub enum PageLoad {
    Transactions(PageResult<Transaction>),
    Blocks(PageResult<Block>),
    Balances(PageResult<Balance>),
    Codes(PageResult<Code>),
}

impl ListRequest {
    pub fn page(&self) -> u64 {
        match self {
            Self::Transactions(r) => r.page,
            Self::Blocks(r) => r.page,
            Self::Balances(r) => r.page,
            Self::Codes(r) => r.page,
        }
    }

    pub async fn run<S>(self, source: &S) -> PageLoad
    where
        S: EntityQuerySource<Transaction>
            + EntityQuerySource<Block>
            + EntityQuerySource<Balance>
            + EntityQuerySource<Code>,
    {
        match self {
            Self::Transactions(r) => PageLoad::Transactions(load_page(source, r).await),
            Self::Blocks(r) => PageLoad::Blocks(load_page(source, r).await),
            Self::Balances(r) => PageLoad::Balances(load_page(source, r).await),
            Self::Codes(r) => PageLoad::Codes(load_page(source, r).await),
        }
    }
}

impl ListScreen {
    /// A fresh list and the request for its first page
    pub fn open(kind: EntityKind, chain_id: &str) -> (Self, ListRequest) {
        let mut list = match kind {
            EntityKind::Transaction => Self::Transactions(PagedList::new(chain_id)),
            EntityKind::Block => Self::Blocks(PagedList::new(chain_id)),
            EntityKind::Balance => Self::Balances(PagedList::new(chain_id)),
            EntityKind::Code => Self::Codes(PagedList::new(chain_id)),
        };
        let request = list.start();
        (list, request)
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Transactions(l) => l.kind(),
            Self::Blocks(l) => l.kind(),
            Self::Balances(l) => l.kind(),
            Self::Codes(l) => l.kind(),
        }
    }

    pub fn start(&mut self) -> ListRequest {
        match self {
            Self::Transactions(l) => ListRequest::Transactions(l.start()),
            Self::Blocks(l) => ListRequest::Blocks(l.start()),
            Self::Balances(l) => ListRequest::Balances(l.start()),
            Self::Codes(l) => ListRequest::Codes(l.start()),
        }
    }

    pub fn set_chain(&mut self, chain_id: &str) -> Option<ListRequest> {
        match self {
            Self::Transactions(l) => l.set_chain(chain_id).map(ListRequest::Transactions),
            Self::Blocks(l) => l.set_chain(chain_id).map(ListRequest::Blocks),
            Self::Balances(l) => l.set_chain(chain_id).map(ListRequest::Balances),
            Self::Codes(l) => l.set_chain(chain_id).map(ListRequest::Codes),
        }
    }

    pub fn next_page(&mut self) -> Option<ListRequest> {
        match self {
            Self::Transactions(l) => l.next_page().map(ListRequest::Transactions),
            Self::Blocks(l) => l.next_page().map(ListRequest::Blocks),
            Self::Balances(l) => l.next_page().map(ListRequest::Balances),
            Self::Codes(l) => l.next_page().map(ListRequest::Codes),
        }
    }

    pub fn prev_page(&mut self) -> Option<ListRequest> {
        match self {
            Self::Transactions(l) => l.prev_page().map(ListRequest::Transactions),
            Self::Blocks(l) => l.prev_page().map(ListRequest::Blocks),
            Self::Balances(l) => l.prev_page().map(ListRequest::Balances),
            Self::Codes(l) => l.prev_page().map(ListRequest::Codes),
        }
    }

    /// Applies a page if it belongs to this list; anything else is ignored
    pub fn apply(&mut self, load: PageLoad) -> bool {
        match (self, load) {
            (Self::Transactions(l), PageLoad::Transactions(r)) => l.apply_result(r),
            (Self::Blocks(l), PageLoad::Blocks(r)) => l.apply_result(r),
            (Self::Balances(l), PageLoad::Balances(r)) => l.apply_result(r),
            (Self::Codes(l), PageLoad::Codes(r)) => l.apply_result(r),
            _ => false,
        }
    }

    pub fn select_next(&mut self) {
        match self {
            Self::Transactions(l) => l.select_next(),
            Self::Blocks(l) => l.select_next(),
            Self::Balances(l) => l.select_next(),
            Self::Codes(l) => l.select_next(),
        }
    }

    pub fn select_prev(&mut self) {
        match self {
            Self::Transactions(l) => l.select_prev(),
            Self::Blocks(l) => l.select_prev(),
            Self::Balances(l) => l.select_prev(),
            Self::Codes(l) => l.select_prev(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Self::Transactions(l) => l.is_loading(),
            Self::Blocks(l) => l.is_loading(),
            Self::Balances(l) => l.is_loading(),
            Self::Codes(l) => l.is_loading(),
        }
    }

    pub fn selected_link(&self) -> Option<NavLink> {
        match self {
            Self::Transactions(l) => l
                .selected_row()
                .map(|tx| NavLink::Transaction(tx.transaction_hash.clone())),
            Self::Blocks(l) => l
                .selected_row()
                .map(|b| NavLink::Block(BlockKey::Number(b.block_number))),
            Self::Balances(l) => l
                .selected_row()
                .map(|b| NavLink::Balance(b.address.clone())),
            Self::Codes(l) => l.selected_row().map(|c| NavLink::Code(c.address.clone())),
        }
    }
}

impl PageLoad {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Transactions(_) => EntityKind::Transaction,
            Self::Blocks(_) => EntityKind::Block,
            Self::Balances(_) => EntityKind::Balance,
            Self::Codes(_) => EntityKind::Code,
        }
    }
}

// ============================================================================
// Detail lookups
// ============================================================================

#[derive(Debug, Clone)]
pub enum DetailLoad {
    Transaction(Transaction),
    Block(Block),
    Balance {
        address: String,
        balances: Vec<Balance>,
    },
    Code(Code),
    NotFound(String),
    Failed(String),
}

/// Fetches the record behind a link. Failures stay distinct from misses so
/// an unreachable indexer is not reported as "not found".
pub async fn load_detail(client: &IndexerClient, chain_id: &str, link: NavLink) -> DetailLoad {
    let result: Result<Option<DetailLoad>, FetchError> = match &link {
        NavLink::Transaction(hash) => client
            .try_fetch::<Transaction>(&TxCriteria::by_hash(chain_id, hash))
            .await
            .map(|txs| {
                let exact = txs
                    .iter()
                    .position(|tx| tx.transaction_hash.eq_ignore_ascii_case(hash))
                    .unwrap_or(0);
                txs.into_iter().nth(exact).map(DetailLoad::Transaction)
            }),
        NavLink::Block(key) => client
            .try_fetch::<Block>(&BlockCriteria::by_key(chain_id, key.clone(), 1))
            .await
            .map(|blocks| blocks.into_iter().next().map(DetailLoad::Block)),
        NavLink::Balance(address) => client
            .try_fetch::<Balance>(&BalanceCriteria::by_address(chain_id, address, PAGE_SIZE))
            .await
            .map(|balances| {
                (!balances.is_empty()).then(|| DetailLoad::Balance {
                    address: address.clone(),
                    balances,
                })
            }),
        NavLink::Code(address) => client
            .try_fetch::<Code>(&CodeCriteria::by_address(chain_id, address, 1))
            .await
            .map(|codes| codes.into_iter().next().map(DetailLoad::Code)),
    };

    match result {
        Ok(Some(load)) => load,
        Ok(None) => DetailLoad::NotFound(format!(
            "{} not found on chain {chain_id}",
            link.describe()
        )),
        Err(e) => DetailLoad::Failed(format!(
            "{}\n\nIndexer: {}",
            format_error_chain(&e),
            client.base_url()
        )),
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub config: Config,
    pub screen: Screen,
    pub history: Vec<Screen>,
    pub search_input: Input,
    pub indexer_input: Input,
    pub chain_input: Input,
    pub search: SearchAggregator,
    pub home_focus: HomeFocus,
    pub selected_section: usize,
    pub selected_history_index: Option<usize>,
    pub status: Option<String>,
    pub should_quit: bool,
    pub client: Option<IndexerClient>,
    detail_seq: u64,
}

fn build_client(config: &Config, url: &str) -> Result<IndexerClient, FetchError> {
    let client = IndexerClient::new(url, config.request_timeout())?;
    Ok(if config.default_query_fallback {
        client.with_default_query(&config.chain_id)
    } else {
        client
    })
}

/// Logs a failed config write; the error text is returned for the status line
fn log_save_error(result: anyhow::Result<()>) -> Option<String> {
    let error = format!("{:#}", result.err()?);
    warn!(%error, "failed to save config");
    Some(error)
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut status = None;
        let client = config
            .indexer_url
            .as_deref()
            .and_then(|url| match build_client(&config, url) {
                Ok(client) => Some(client),
                Err(e) => {
                    status = Some(e.to_string());
                    None
                }
            });

        Self {
            chain_input: Input::new(config.chain_id.clone()),
            config,
            screen: Screen::Home,
            history: Vec::new(),
            search_input: Input::default(),
            indexer_input: Input::default(),
            search: SearchAggregator::default(),
            home_focus: HomeFocus::Search,
            selected_section: 0,
            selected_history_index: None,
            status,
            should_quit: false,
            client,
            detail_seq: 0,
        }
    }

    pub fn submit_indexer(&mut self) -> Result<(), String> {
        let url = self.indexer_input.value().trim().to_string();
        if url.is_empty() {
            return Err("Indexer URL cannot be empty".to_string());
        }

        match build_client(&self.config, &url) {
            Ok(client) => {
                self.client = Some(client);
                self.status = None;
                log_save_error(self.config.set_indexer(url));
                self.indexer_input.reset();
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn needs_indexer_setup(&self) -> bool {
        self.client.is_none()
    }

    pub fn has_indexer(&self) -> bool {
        self.client.is_some()
    }

    pub fn indexer_url(&self) -> Option<&str> {
        self.client.as_ref().map(IndexerClient::base_url)
    }

    pub fn chain_id(&self) -> &str {
        &self.config.chain_id
    }

    /// Switches the selected chain. The visible list is re-scoped and its
    /// first page requested.
    pub fn set_chain_id(&mut self, chain_id: &str) -> Result<Option<ListRequest>, String> {
        let chain_id = chain_id.trim();
        if chain_id.is_empty() || !chain_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid chain id: {chain_id:?}"));
        }
        self.status = None;
        if chain_id == self.config.chain_id {
            return Ok(None);
        }

        self.status = log_save_error(self.config.set_chain(chain_id.to_string()))
            .map(|error| format!("Chain {chain_id} (not saved: {error})"));
        if let Some(url) = self.config.indexer_url.clone() {
            if let Ok(client) = build_client(&self.config, &url) {
                self.client = Some(client);
            }
        }
        self.search.clear();
        self.search_input.reset();
        self.chain_input = Input::new(chain_id.to_string());

        Ok(match &mut self.screen {
            Screen::List(list) => list.set_chain(chain_id),
            _ => None,
        })
    }

    pub fn submit_chain(&mut self) -> Option<ListRequest> {
        let value = self.chain_input.value().to_string();
        match self.set_chain_id(&value) {
            Ok(request) => {
                if self.status.is_none() {
                    self.status = Some(format!("Chain {}", self.config.chain_id));
                }
                request
            }
            Err(e) => {
                self.status = Some(e);
                None
            }
        }
    }

    // ==================== Home ====================

    pub fn focus_next(&mut self) {
        self.home_focus = match self.home_focus {
            HomeFocus::Search => HomeFocus::Sections,
            HomeFocus::Sections => HomeFocus::Chain,
            HomeFocus::Chain => HomeFocus::Search,
        };
        if self.home_focus != HomeFocus::Search {
            self.search.close();
            self.selected_history_index = None;
        }
    }

    pub fn select_section_next(&mut self) {
        self.selected_section = (self.selected_section + 1) % SECTIONS.len();
    }

    pub fn select_section_prev(&mut self) {
        self.selected_section = (self.selected_section + SECTIONS.len() - 1) % SECTIONS.len();
    }

    /// Opens the highlighted section's list
    pub fn open_section(&mut self) -> ListRequest {
        let kind = SECTIONS[self.selected_section % SECTIONS.len()];
        let (list, request) = ListScreen::open(kind, &self.config.chain_id);
        self.navigate_to(Screen::List(list));
        request
    }

    /// Feeds the search field's current text to the aggregator
    pub fn on_search_input(&mut self, now: Instant) {
        self.selected_history_index = None;
        let text = self.search_input.value().to_string();
        self.search.on_input(&text, now);
    }

    pub fn get_recent_searches(&self) -> &[String] {
        &self.config.recent_searches
    }

    pub fn select_history_prev(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(0) => None, // Wrap to search input
            Some(i) => Some(i - 1),
        };
    }

    pub fn select_history_next(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(i) if i >= len - 1 => None, // Wrap to search input
            Some(i) => Some(i + 1),
        };
    }

    pub fn get_selected_history_query(&self) -> Option<String> {
        self.selected_history_index
            .and_then(|i| self.config.recent_searches.get(i).cloned())
    }

    pub fn clear_history_selection(&mut self) {
        self.selected_history_index = None;
    }

    pub fn delete_selected_history(&mut self) {
        if let Some(idx) = self.selected_history_index {
            if idx < self.config.recent_searches.len() {
                self.config.recent_searches.remove(idx);
                log_save_error(self.config.save());

                if self.config.recent_searches.is_empty() {
                    self.selected_history_index = None;
                } else if idx >= self.config.recent_searches.len() {
                    self.selected_history_index = Some(self.config.recent_searches.len() - 1);
                }
            }
        }
    }

    /// Enter on the home screen: a highlighted recent search, else the
    /// highlighted live result, else a direct lookup of the typed text.
    pub fn commit_search(&mut self) -> Option<NavLink> {
        let (query, link) = if let Some(query) = self.get_selected_history_query() {
            self.clear_history_selection();
            let link = direct_target(&query);
            (query, link)
        } else {
            let query = self.search_input.value().trim().to_string();
            if query.is_empty() {
                return None;
            }
            let link = match self.search.commit() {
                Some(result) => Some(result.target),
                None => direct_target(&query),
            };
            (query, link)
        };

        match link {
            Some(link) => {
                log_save_error(self.config.add_recent_search(query));
                self.search_input.reset();
                self.search.clear();
                Some(link)
            }
            None => {
                self.status = Some(format!("Nothing to look up for {query:?}"));
                None
            }
        }
    }

    // ==================== Navigation ====================

    pub fn navigate_to(&mut self, screen: Screen) {
        if !matches!(
            self.screen,
            Screen::Home | Screen::Loading(_) | Screen::NotFound(_) | Screen::Error(_)
        ) {
            self.history.push(self.screen.clone());
        }
        self.screen = screen;
    }

    /// Pops the previous screen. A list coming back into view is re-scoped
    /// when the chain changed while it was hidden.
    pub fn go_back(&mut self) -> Option<ListRequest> {
        self.detail_seq += 1;
        match self.history.pop() {
            Some(prev) => {
                self.screen = prev;
                let chain_id = self.config.chain_id.clone();
                match &mut self.screen {
                    Screen::List(list) => list.set_chain(&chain_id),
                    _ => None,
                }
            }
            None => {
                self.go_home();
                None
            }
        }
    }

    pub fn go_home(&mut self) {
        self.detail_seq += 1;
        self.history.clear();
        self.screen = Screen::Home;
    }

    pub fn set_loading(&mut self, msg: &str) {
        if !matches!(
            self.screen,
            Screen::Home | Screen::Loading(_) | Screen::NotFound(_) | Screen::Error(_)
        ) {
            self.history.push(self.screen.clone());
        }
        self.screen = Screen::Loading(msg.to_string());
    }

    pub fn set_error(&mut self, msg: String) {
        self.navigate_to(Screen::Error(msg));
    }

    /// Shows the loading screen for a lookup and returns the sequence number
    /// its result must carry
    pub fn begin_detail(&mut self, link: &NavLink) -> u64 {
        self.detail_seq += 1;
        self.set_loading(&format!("Fetching {}...", link.describe()));
        self.detail_seq
    }

    /// Shows a finished lookup unless the user has moved on since
    pub fn apply_detail(&mut self, seq: u64, load: DetailLoad) -> bool {
        if seq != self.detail_seq || !self.is_loading() {
            debug!(seq, current = self.detail_seq, "discarding stale detail");
            return false;
        }

        let screen = match load {
            DetailLoad::Transaction(tx) => Screen::TxDetail(TxDetail {
                tx,
                selected_link: 0,
            }),
            DetailLoad::Block(block) => Screen::BlockDetail(BlockDetail {
                block,
                selected_link: 0,
            }),
            DetailLoad::Balance { address, balances } => Screen::BalanceDetail(BalanceDetail {
                address,
                balances,
                selected_link: 0,
            }),
            DetailLoad::Code(code) => Screen::CodeDetail(CodeDetail {
                code,
                selected_link: 0,
            }),
            DetailLoad::NotFound(msg) => Screen::NotFound(msg),
            DetailLoad::Failed(msg) => Screen::Error(msg),
        };
        self.screen = screen;
        true
    }

    /// Routes a fetched page to its list, on screen or in history
    pub fn apply_page(&mut self, load: PageLoad) -> bool {
        let Some(list) = std::iter::once(&mut self.screen)
            .chain(self.history.iter_mut().rev())
            .find_map(|screen| match screen {
                Screen::List(list) if list.kind() == load.kind() => Some(list),
                _ => None,
            })
        else {
            debug!(kind = load.kind().path(), "page arrived for a closed list");
            return false;
        };
        list.apply(load)
    }

    pub fn next_page(&mut self) -> Option<ListRequest> {
        match &mut self.screen {
            Screen::List(list) => list.next_page(),
            _ => None,
        }
    }

    pub fn prev_page(&mut self) -> Option<ListRequest> {
        match &mut self.screen {
            Screen::List(list) => list.prev_page(),
            _ => None,
        }
    }

    pub fn is_on_home(&self) -> bool {
        matches!(self.screen, Screen::Home)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading(_))
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        match &mut self.screen {
            Screen::List(list) => list.select_prev(),
            Screen::TxDetail(d) => {
                let len = d.links().len();
                cycle_back(&mut d.selected_link, len);
            }
            Screen::BlockDetail(d) => {
                let len = d.links().len();
                cycle_back(&mut d.selected_link, len);
            }
            Screen::BalanceDetail(d) => {
                let len = d.links().len();
                cycle_back(&mut d.selected_link, len);
            }
            Screen::CodeDetail(d) => {
                let len = d.links().len();
                cycle_back(&mut d.selected_link, len);
            }
            _ => {}
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        match &mut self.screen {
            Screen::List(list) => list.select_next(),
            Screen::TxDetail(d) => {
                let len = d.links().len();
                cycle_forward(&mut d.selected_link, len);
            }
            Screen::BlockDetail(d) => {
                let len = d.links().len();
                cycle_forward(&mut d.selected_link, len);
            }
            Screen::BalanceDetail(d) => {
                let len = d.links().len();
                cycle_forward(&mut d.selected_link, len);
            }
            Screen::CodeDetail(d) => {
                let len = d.links().len();
                cycle_forward(&mut d.selected_link, len);
            }
            _ => {}
        }
    }

    /// Get the currently selected navigation link
    pub fn get_selected_link(&self) -> Option<NavLink> {
        match &self.screen {
            Screen::List(list) => list.selected_link(),
            Screen::TxDetail(d) => d.links().get(d.selected_link).cloned(),
            Screen::BlockDetail(d) => d.links().get(d.selected_link).cloned(),
            Screen::BalanceDetail(d) => d.links().get(d.selected_link).cloned(),
            Screen::CodeDetail(d) => d.links().get(d.selected_link).cloned(),
            _ => None,
        }
    }
}
