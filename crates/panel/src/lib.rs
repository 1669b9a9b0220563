//! The token panel: view state and operations for one ERC20 contract.
//!
//! This is the console's equivalent of a page component. It owns the view
//! state (token name, symbol, user balance, form inputs), resolves the
//! contract descriptor from the deployment registry for the current
//! session, and delegates reads and writes to injected [`TokenReader`] and
//! [`TokenWriter`] implementations.
//!
//! There is no ambient context and no implicit re-run-on-change effect:
//! the caller holds the panel, updates the session explicitly, and calls
//! [`TokenPanel::reload`] whenever the network, account, or deployments
//! change. A generation counter guards against a stale in-flight read
//! overwriting a newer one.

pub mod form;
mod render;

pub use form::Forms;
pub use render::{format_token_amount, LOADING_PLACEHOLDER};

use alloy_primitives::{Address, TxHash, U256};
use config::{ContractDescriptor, DeploymentRegistry};
use token::{TokenReader, TokenSnapshot, TokenWriter};
use tracing::{debug, warn};

/// Explicit wallet/network context, replacing ambient hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Active chain id
    pub chain_id: u64,
    /// Connected account, if any
    pub account: Option<Address>,
}

impl Session {
    pub const fn new(chain_id: u64, account: Option<Address>) -> Self {
        Self { chain_id, account }
    }
}

/// View state displayed by the panel.
///
/// Every field reflects the last successful read; failed reads leave the
/// previous values in place and set [`TokenView::last_error`].
#[derive(Debug, Clone, Default)]
pub struct TokenView {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Balance of the session account, in smallest units
    pub balance: U256,
    /// Most recent read/write failure, cleared by the next success
    pub last_error: Option<String>,
}

/// Panel over one logical token contract.
pub struct TokenPanel<R, W> {
    reader: R,
    writer: W,
    registry: DeploymentRegistry,
    contract_name: String,
    session: Session,
    forms: Forms,
    view: TokenView,
    generation: u64,
}

impl<R, W> TokenPanel<R, W> {
    /// Create a panel for the named contract.
    ///
    /// The descriptor is resolved lazily from `registry` on every access,
    /// so a registry without a deployment for the session's chain renders
    /// the loading placeholder until the session changes.
    pub fn new(
        reader: R,
        writer: W,
        registry: DeploymentRegistry,
        contract_name: impl Into<String>,
        session: Session,
    ) -> Self {
        Self {
            reader,
            writer,
            registry,
            contract_name: contract_name.into(),
            session,
            forms: Forms::default(),
            view: TokenView::default(),
            generation: 0,
        }
    }

    /// Current session.
    pub const fn session(&self) -> Session {
        self.session
    }

    /// Replace the session (network switch, account change).
    ///
    /// Callers should [`reload`](Self::reload) afterwards; the panel keeps
    /// displaying the previous values until they do.
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    /// Contract descriptor for the current session, if deployed.
    pub fn descriptor(&self) -> Option<&ContractDescriptor> {
        self.registry.lookup(self.session.chain_id, &self.contract_name)
    }

    /// Current view state.
    pub const fn view(&self) -> &TokenView {
        &self.view
    }

    /// Form inputs.
    pub const fn forms(&self) -> &Forms {
        &self.forms
    }

    /// Mutable form inputs.
    pub fn forms_mut(&mut self) -> &mut Forms {
        &mut self.forms
    }

    /// Start a reload and return its generation.
    ///
    /// Any snapshot applied under an older generation is discarded, so the
    /// view always reflects the newest reload that completed, not whichever
    /// response happened to arrive last.
    pub fn begin_reload(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply a fetched snapshot if `generation` is still current.
    ///
    /// Returns false (and leaves the view untouched) for stale generations.
    pub fn apply_snapshot(&mut self, generation: u64, snapshot: TokenSnapshot) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Discarding stale token snapshot"
            );
            return false;
        }

        self.view.name = snapshot.name;
        self.view.symbol = snapshot.symbol;
        self.view.balance = snapshot.balance;
        self.view.last_error = None;
        true
    }

    fn record_read_failure(&mut self, generation: u64, error: &eyre::Report) -> bool {
        if generation != self.generation {
            return false;
        }
        self.view.last_error = Some(format!("token read failed: {error}"));
        true
    }
}

impl<R, W> TokenPanel<R, W>
where
    R: TokenReader,
    W: TokenWriter,
{
    /// Fetch a fresh snapshot for the current session.
    ///
    /// Returns `Ok(None)` when no descriptor is resolved. When the session
    /// has no account, the balance carries its previous value.
    pub async fn fetch_snapshot(&self) -> eyre::Result<Option<TokenSnapshot>> {
        let Some(descriptor) = self.descriptor() else {
            return Ok(None);
        };
        let token = descriptor.address;

        let name = self.reader.name(token).await?;
        let symbol = self.reader.symbol(token).await?;

        let balance = match self.session.account {
            Some(account) => self.reader.balance_of(token, account).await?,
            None => self.view.balance,
        };

        Ok(Some(TokenSnapshot {
            name,
            symbol,
            balance,
        }))
    }

    /// Reload the view state: fetch a snapshot and apply it.
    ///
    /// Read failures never propagate; they are logged, recorded in
    /// [`TokenView::last_error`], and the previous values stay displayed.
    pub async fn reload(&mut self) {
        let generation = self.begin_reload();

        match self.fetch_snapshot().await {
            Ok(Some(snapshot)) => {
                self.apply_snapshot(generation, snapshot);
            }
            Ok(None) => {
                debug!(
                    chain_id = self.session.chain_id,
                    contract = %self.contract_name,
                    "No deployment for contract, skipping reload"
                );
            }
            Err(error) => {
                warn!(error = %error, "Error reading token info");
                self.record_read_failure(generation, &error);
            }
        }
    }

    /// Submit a transfer from the transfer form.
    ///
    /// Returns `None` without touching the writer when the descriptor is
    /// unresolved or the form does not validate, and `None` with
    /// [`TokenView::last_error`] set when the write pipeline fails.
    pub async fn submit_transfer(&mut self) -> Option<TxHash> {
        let token = self.descriptor()?.address;
        let recipient = form::parse_address(&self.forms.recipient)?;
        let amount = form::parse_amount(&self.forms.amount)?;

        match self.writer.transfer(token, recipient, amount).await {
            Ok(tx_hash) => {
                self.view.last_error = None;
                Some(tx_hash)
            }
            Err(error) => {
                warn!(error = %error, "Transfer failed");
                self.view.last_error = Some(format!("transfer failed: {error}"));
                None
            }
        }
    }

    /// Submit an approval from the approve form.
    ///
    /// Same preconditions and failure handling as
    /// [`submit_transfer`](Self::submit_transfer), targeting `approve`.
    pub async fn submit_approve(&mut self) -> Option<TxHash> {
        let token = self.descriptor()?.address;
        let spender = form::parse_address(&self.forms.spender)?;
        let amount = form::parse_amount(&self.forms.amount)?;

        match self.writer.approve(token, spender, amount).await {
            Ok(tx_hash) => {
                self.view.last_error = None;
                Some(tx_hash)
            }
            Err(error) => {
                warn!(error = %error, "Approval failed");
                self.view.last_error = Some(format!("approve failed: {error}"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LOADING_PLACEHOLDER;
    use alloy_primitives::{address, b256, utils::parse_ether};
    use std::sync::{Arc, Mutex};

    const TOKEN: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
    const OTHER_TOKEN: Address = address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512");
    const ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    #[derive(Clone)]
    struct MockReader {
        token_name: String,
        token_symbol: String,
        balance: U256,
        fail: bool,
        /// Token addresses queried, in order
        queried: Arc<Mutex<Vec<Address>>>,
    }

    impl MockReader {
        fn test_token() -> Self {
            Self {
                token_name: "Test".to_string(),
                token_symbol: "TST".to_string(),
                balance: parse_ether("1").unwrap(),
                fail: false,
                queried: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::test_token()
            }
        }
    }

    impl TokenReader for MockReader {
        async fn name(&self, token: Address) -> eyre::Result<String> {
            self.queried.lock().unwrap().push(token);
            if self.fail {
                eyre::bail!("transport error");
            }
            Ok(self.token_name.clone())
        }

        async fn symbol(&self, token: Address) -> eyre::Result<String> {
            self.queried.lock().unwrap().push(token);
            if self.fail {
                eyre::bail!("transport error");
            }
            Ok(self.token_symbol.clone())
        }

        async fn balance_of(&self, token: Address, _holder: Address) -> eyre::Result<U256> {
            self.queried.lock().unwrap().push(token);
            if self.fail {
                eyre::bail!("transport error");
            }
            Ok(self.balance)
        }
    }

    #[derive(Clone)]
    struct MockWriter {
        fail: bool,
        /// (token, counterparty, amount) per submitted write
        calls: Arc<Mutex<Vec<(Address, Address, U256)>>>,
    }

    impl MockWriter {
        fn new() -> Self {
            Self {
                fail: false,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }
    }

    impl TokenWriter for MockWriter {
        async fn transfer(
            &self,
            token: Address,
            recipient: Address,
            amount: U256,
        ) -> eyre::Result<TxHash> {
            self.calls.lock().unwrap().push((token, recipient, amount));
            if self.fail {
                eyre::bail!("user rejected");
            }
            Ok(b256!(
                "1111111111111111111111111111111111111111111111111111111111111111"
            ))
        }

        async fn approve(
            &self,
            token: Address,
            spender: Address,
            amount: U256,
        ) -> eyre::Result<TxHash> {
            self.calls.lock().unwrap().push((token, spender, amount));
            if self.fail {
                eyre::bail!("user rejected");
            }
            Ok(b256!(
                "2222222222222222222222222222222222222222222222222222222222222222"
            ))
        }
    }

    fn test_registry() -> DeploymentRegistry {
        let mut registry = DeploymentRegistry::new();
        registry.insert(
            31337,
            "YourToken",
            ContractDescriptor {
                address: TOKEN,
                interface: "ERC20".to_string(),
            },
        );
        registry.insert(
            11155111,
            "YourToken",
            ContractDescriptor {
                address: OTHER_TOKEN,
                interface: "ERC20".to_string(),
            },
        );
        registry
    }

    fn test_panel(
        reader: MockReader,
        writer: MockWriter,
    ) -> TokenPanel<MockReader, MockWriter> {
        TokenPanel::new(
            reader,
            writer,
            test_registry(),
            "YourToken",
            Session::new(31337, Some(ACCOUNT)),
        )
    }

    #[tokio::test]
    async fn test_reload_populates_view() {
        let mut panel = test_panel(MockReader::test_token(), MockWriter::new());

        panel.reload().await;

        assert_eq!(panel.view().name, "Test");
        assert_eq!(panel.view().symbol, "TST");
        assert_eq!(panel.view().balance, parse_ether("1").unwrap());
        assert!(panel.view().last_error.is_none());
    }

    #[tokio::test]
    async fn test_render_loaded_view() {
        let mut panel = test_panel(MockReader::test_token(), MockWriter::new());
        panel.reload().await;

        let rendered = panel.render();
        assert!(rendered.contains("Test (TST)"));
        assert!(rendered.contains("Your Balance: 1 TST"));
    }

    #[tokio::test]
    async fn test_absent_descriptor_renders_placeholder_only() {
        let reader = MockReader::test_token();
        let mut panel = TokenPanel::new(
            reader.clone(),
            MockWriter::new(),
            test_registry(),
            "YourToken",
            // No deployment registered for this chain
            Session::new(424242, Some(ACCOUNT)),
        );

        panel.reload().await;

        assert_eq!(panel.render(), LOADING_PLACEHOLDER);
        assert!(reader.queried.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_keeps_previous_values() {
        let mut panel = test_panel(MockReader::test_token(), MockWriter::new());
        panel.reload().await;

        // Flip the panel's reader into failure mode.
        panel.reader.fail = true;
        panel.reload().await;

        assert_eq!(panel.view().name, "Test");
        assert_eq!(panel.view().symbol, "TST");
        assert_eq!(panel.view().balance, parse_ether("1").unwrap());
        assert!(panel.view().last_error.is_some());
    }

    #[tokio::test]
    async fn test_read_success_clears_error() {
        let mut panel = test_panel(MockReader::failing(), MockWriter::new());
        panel.reload().await;
        assert!(panel.view().last_error.is_some());

        panel.reader.fail = false;
        panel.reload().await;
        assert!(panel.view().last_error.is_none());
    }

    #[tokio::test]
    async fn test_no_account_keeps_balance() {
        let mut panel = test_panel(MockReader::test_token(), MockWriter::new());
        panel.reload().await;
        assert_eq!(panel.view().balance, parse_ether("1").unwrap());

        // Disconnect: name/symbol still read, balance carries forward even
        // though the reader would now report a different amount.
        panel.reader.balance = parse_ether("7").unwrap();
        panel.set_session(Session::new(31337, None));
        panel.reload().await;

        assert_eq!(panel.view().balance, parse_ether("1").unwrap());
        assert_eq!(panel.view().name, "Test");
    }

    #[tokio::test]
    async fn test_stale_snapshot_discarded() {
        let mut panel = test_panel(MockReader::test_token(), MockWriter::new());

        let stale_generation = panel.begin_reload();
        let stale_snapshot = panel.fetch_snapshot().await.unwrap().unwrap();

        // A newer reload begins and completes before the first applies.
        panel.reader.token_name = "Renamed".to_string();
        panel.reload().await;
        assert_eq!(panel.view().name, "Renamed");

        assert!(!panel.apply_snapshot(stale_generation, stale_snapshot));
        assert_eq!(panel.view().name, "Renamed");
    }

    #[tokio::test]
    async fn test_session_switch_rereads_new_descriptor() {
        let reader = MockReader::test_token();
        let mut panel = test_panel(reader.clone(), MockWriter::new());

        panel.reload().await;
        assert!(reader.queried.lock().unwrap().iter().all(|t| *t == TOKEN));

        reader.queried.lock().unwrap().clear();
        panel.set_session(Session::new(11155111, Some(ACCOUNT)));
        panel.reload().await;

        let queried = reader.queried.lock().unwrap();
        assert_eq!(queried.len(), 3);
        assert!(queried.iter().all(|t| *t == OTHER_TOKEN));
    }

    #[tokio::test]
    async fn test_transfer_submits_parsed_arguments() {
        let writer = MockWriter::new();
        let mut panel = test_panel(MockReader::test_token(), writer.clone());

        panel.forms_mut().recipient = RECIPIENT.to_string();
        panel.forms_mut().amount = "1.5".to_string();

        let tx_hash = panel.submit_transfer().await;
        assert!(tx_hash.is_some());

        let calls = writer.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![(
                TOKEN,
                RECIPIENT.parse::<Address>().unwrap(),
                parse_ether("1.5").unwrap()
            )]
        );

        // Forms are not reset by a successful submission.
        assert_eq!(panel.forms().amount, "1.5");
    }

    #[tokio::test]
    async fn test_malformed_recipient_never_reaches_writer() {
        let writer = MockWriter::new();
        let mut panel = test_panel(MockReader::test_token(), writer.clone());

        panel.forms_mut().recipient = "0xnotanaddress".to_string();
        panel.forms_mut().amount = "1".to_string();

        assert!(panel.submit_transfer().await.is_none());
        assert!(writer.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_amount_never_reaches_writer() {
        let writer = MockWriter::new();
        let mut panel = test_panel(MockReader::test_token(), writer.clone());

        panel.forms_mut().spender = RECIPIENT.to_string();

        assert!(panel.submit_approve().await.is_none());
        assert!(writer.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_surfaces_error() {
        let writer = MockWriter::failing();
        let mut panel = test_panel(MockReader::test_token(), writer.clone());

        panel.forms_mut().spender = RECIPIENT.to_string();
        panel.forms_mut().amount = "2".to_string();

        assert!(panel.submit_approve().await.is_none());
        assert_eq!(writer.calls.lock().unwrap().len(), 1);
        assert!(panel
            .view()
            .last_error
            .as_deref()
            .unwrap()
            .contains("approve failed"));
    }
}

