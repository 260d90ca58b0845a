use std::fmt;
use std::path::Path;

use anchor_lang::AccountDeserialize;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::associated_token::spl_associated_token_account::instruction::create_associated_token_account;
use anchor_spl::token;
use log::{info, warn};
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::native_token::sol_to_lamports;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::signer::keypair::read_keypair_file;
use solana_sdk::signer::{Signer, SignerError};
use solana_sdk::system_program;
use solana_sdk::transaction::Transaction;

use crate::chain::ChainClient;
use crate::constants::{DMD_MINT, RPC_URL, TREASURY};
use crate::errors::ChainError;
use crate::instructions::{
    self, BuyDmdAccounts, ClaimRewardAccounts, InitializeAccounts, SellDmdAccounts,
    TogglePublicSaleAccounts, WhitelistAddAccounts,
};
use crate::pda::Pdas;
use crate::state::{BuyerState, Vault};

/// Account routing for the instructions that reference the founder's
/// token account. The deployed program releases DMD out of one account
/// on every purchase; by default that account belongs to the connected
/// wallet, the flow the program was launched with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Routing {
    /// Holder of the DMD float spent by `buy_dmd`. `None` routes to the
    /// connected wallet.
    pub founder_token_owner: Option<Pubkey>,
}

/// One attempted action and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub action: &'static str,
    pub ok: bool,
    /// Transaction signature or created address on success, the
    /// formatted error on failure.
    pub detail: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok {
            write!(f, "{}: {}", self.action, self.detail)
        } else {
            write!(f, "{} failed: {}", self.action, self.detail)
        }
    }
}

/// Ordered record of everything the session attempted, newest last.
/// This is the user-visible status feed; errors land here instead of
/// being returned.
#[derive(Debug, Default)]
pub struct ActionLog {
    entries: Vec<LogEntry>,
}

impl ActionLog {
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn success(&mut self, action: &'static str, detail: String) {
        info!("{action}: {detail}");
        self.entries.push(LogEntry {
            action,
            ok: true,
            detail,
        });
    }

    fn failure(&mut self, action: &'static str, error: &ChainError) {
        let detail = error.to_string();
        warn!("{action} failed: {detail}");
        self.entries.push(LogEntry {
            action,
            ok: false,
            detail,
        });
    }
}

/// Shell around the deployed presale program: owns the chain handle,
/// the connected wallet, the addresses derived from it, and the last
/// fetched snapshot of each on-chain record.
///
/// Every action is a single attempt. Outcomes go to the [`ActionLog`];
/// nothing is retried and nothing panics. With no wallet connected the
/// actions return without touching the network.
pub struct Session<C> {
    chain: C,
    routing: Routing,
    wallet: Option<Box<dyn Signer>>,
    pdas: Option<Pdas>,
    vault: Option<Vault>,
    buyer_state: Option<BuyerState>,
    log: ActionLog,
}

impl Session<RpcClient> {
    /// Session against the devnet endpoint the program is deployed to,
    /// confirmed commitment.
    pub fn devnet() -> Self {
        Self::new(RpcClient::new_with_commitment(
            RPC_URL.to_string(),
            CommitmentConfig::confirmed(),
        ))
    }
}

impl<C: ChainClient> Session<C> {
    pub fn new(chain: C) -> Self {
        Self::with_routing(chain, Routing::default())
    }

    pub fn with_routing(chain: C, routing: Routing) -> Self {
        Self {
            chain,
            routing,
            wallet: None,
            pdas: None,
            vault: None,
            buyer_state: None,
            log: ActionLog::default(),
        }
    }

    /// Connect a wallet: derive the vault and buyer-state addresses for
    /// it and take an initial snapshot of both records.
    pub fn connect(&mut self, wallet: Box<dyn Signer>) -> Pubkey {
        let address = wallet.pubkey();
        info!("wallet connected: {address}");
        self.pdas = Some(Pdas::for_wallet(&address));
        self.wallet = Some(wallet);
        self.refresh();
        address
    }

    /// Connect from a Solana CLI keypair file.
    pub fn connect_keypair_file(&mut self, path: impl AsRef<Path>) -> Result<Pubkey, ChainError> {
        let keypair = read_keypair_file(path.as_ref())
            .map_err(|error| SignerError::Custom(error.to_string()))?;
        Ok(self.connect(Box::new(keypair)))
    }

    pub fn disconnect(&mut self) {
        if let Some(address) = self.wallet() {
            info!("wallet disconnected: {address}");
        }
        self.wallet = None;
        self.pdas = None;
        self.vault = None;
        self.buyer_state = None;
    }

    pub fn wallet(&self) -> Option<Pubkey> {
        self.wallet.as_ref().map(|wallet| wallet.pubkey())
    }

    pub fn pdas(&self) -> Option<Pdas> {
        self.pdas
    }

    pub fn vault(&self) -> Option<&Vault> {
        self.vault.as_ref()
    }

    pub fn buyer_state(&self) -> Option<&BuyerState> {
        self.buyer_state.as_ref()
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Set up the vault. The founder's token account is created first
    /// when missing; `price_sol` is the DMD price in SOL.
    pub fn initialize(&mut self, price_sol: f64) {
        let Some((wallet, pdas)) = self.context() else {
            return;
        };
        let result = self.initialize_transaction(wallet, pdas, sol_to_lamports(price_sol));
        self.finish("initialize", result);
    }

    /// Switch the public sale on or off. Founder only; the program
    /// rejects other signers.
    pub fn toggle_sale(&mut self, active: bool) {
        let Some((wallet, pdas)) = self.context() else {
            return;
        };
        let instruction = instructions::toggle_public_sale(
            TogglePublicSaleAccounts {
                vault: pdas.vault,
                founder: wallet,
            },
            active,
        );
        let result = self.submit(&[instruction], wallet);
        self.finish("toggle_public_sale", result);
    }

    /// Buy DMD for `sol` SOL. Creates whichever of the founder and
    /// buyer token accounts is still missing before submitting the
    /// purchase itself.
    pub fn buy(&mut self, sol: f64) {
        let Some((wallet, pdas)) = self.context() else {
            return;
        };
        let result = self.buy_transaction(wallet, pdas, sol_to_lamports(sol));
        self.finish("buy_dmd", result);
    }

    /// Create the connected wallet's DMD token account if it does not
    /// exist yet.
    pub fn create_token_account(&mut self) {
        let Some((wallet, _)) = self.context() else {
            return;
        };
        if let Err(error) = self.ensure_token_account(&wallet) {
            self.log.failure("create_token_account", &error);
        }
    }

    pub fn whitelist_add(&mut self, status: bool) {
        let Some((wallet, pdas)) = self.context() else {
            return;
        };
        let instruction = instructions::whitelist_add(
            WhitelistAddAccounts {
                buyer_state: pdas.buyer_state,
            },
            status,
        );
        let result = self.submit(&[instruction], wallet);
        self.finish("whitelist_add", result);
    }

    pub fn claim_reward(&mut self) {
        let Some((wallet, pdas)) = self.context() else {
            return;
        };
        let instruction = instructions::claim_reward(ClaimRewardAccounts {
            vault: pdas.vault,
            buyer_state: pdas.buyer_state,
        });
        let result = self.submit(&[instruction], wallet);
        self.finish("claim_reward", result);
    }

    /// Sell `amount` DMD back, in base units of the mint.
    pub fn sell(&mut self, amount: u64) {
        let Some((wallet, pdas)) = self.context() else {
            return;
        };
        let instruction = instructions::sell_dmd(
            SellDmdAccounts {
                vault: pdas.vault,
                buyer_state: pdas.buyer_state,
            },
            amount,
        );
        let result = self.submit(&[instruction], wallet);
        self.finish("sell_dmd", result);
    }

    /// Re-fetch both records. An absent account or a failed fetch
    /// leaves the snapshot empty; neither is an error here.
    pub fn refresh(&mut self) {
        let Some((_, pdas)) = self.context() else {
            return;
        };
        self.vault = self.fetch(&pdas.vault);
        self.buyer_state = self.fetch(&pdas.buyer_state);
    }

    pub fn vault_panel(&self) -> String {
        render(self.vault.as_ref())
    }

    pub fn buyer_panel(&self) -> String {
        render(self.buyer_state.as_ref())
    }

    /// Derive the DMD associated token account for `owner` and create
    /// it if absent, with the connected wallet paying. Returns the
    /// address either way.
    pub fn ensure_token_account(&mut self, owner: &Pubkey) -> Result<Pubkey, ChainError> {
        let payer = self.wallet().ok_or(ChainError::WalletDisconnected)?;
        let address = get_associated_token_address(owner, &DMD_MINT);
        if self.chain.account(&address)?.is_none() {
            let create = create_associated_token_account(&payer, owner, &DMD_MINT, &token::ID);
            self.submit(&[create], payer)?;
            self.log.success("create_token_account", address.to_string());
        }
        Ok(address)
    }

    fn initialize_transaction(
        &mut self,
        wallet: Pubkey,
        pdas: Pdas,
        initial_price_sol: u64,
    ) -> Result<Signature, ChainError> {
        let founder_owner = self.founder_token_owner(wallet);
        let founder_token_account = self.ensure_token_account(&founder_owner)?;
        let instruction = instructions::initialize(
            InitializeAccounts {
                vault: pdas.vault,
                buyer_state: pdas.buyer_state,
                founder: wallet,
                mint: DMD_MINT,
                founder_token_account,
                token_program: token::ID,
                system_program: system_program::ID,
            },
            initial_price_sol,
        );
        self.submit(&[instruction], wallet)
    }

    fn buy_transaction(
        &mut self,
        wallet: Pubkey,
        pdas: Pdas,
        sol_contribution: u64,
    ) -> Result<Signature, ChainError> {
        let founder_owner = self.founder_token_owner(wallet);
        let founder_token_account = self.ensure_token_account(&founder_owner)?;
        let buyer_token_account = self.ensure_token_account(&wallet)?;
        let instruction = instructions::buy_dmd(
            BuyDmdAccounts {
                vault: pdas.vault,
                buyer_state: pdas.buyer_state,
                founder: wallet,
                treasury: TREASURY,
                founder_token_account,
                buyer_token_account,
                buyer: wallet,
                token_program: token::ID,
                system_program: system_program::ID,
            },
            sol_contribution,
        );
        self.submit(&[instruction], wallet)
    }

    /// Sign with the connected wallet and send. A signing refusal
    /// aborts before anything reaches the network.
    fn submit(&self, instructions: &[Instruction], payer: Pubkey) -> Result<Signature, ChainError> {
        let wallet = self.wallet.as_ref().ok_or(ChainError::WalletDisconnected)?;
        let blockhash = self.chain.latest_blockhash()?;
        let mut transaction = Transaction::new_with_payer(instructions, Some(&payer));
        let signers: Vec<&dyn Signer> = vec![wallet.as_ref()];
        transaction.try_sign(&signers, blockhash)?;
        self.chain.send_and_confirm(&transaction)
    }

    fn context(&self) -> Option<(Pubkey, Pdas)> {
        Some((self.wallet()?, self.pdas?))
    }

    fn founder_token_owner(&self, wallet: Pubkey) -> Pubkey {
        self.routing.founder_token_owner.unwrap_or(wallet)
    }

    fn finish(&mut self, action: &'static str, result: Result<Signature, ChainError>) {
        match result {
            Ok(signature) => self.log.success(action, signature.to_string()),
            Err(error) => self.log.failure(action, &error),
        }
    }

    fn fetch<T: AccountDeserialize>(&self, address: &Pubkey) -> Option<T> {
        let account = match self.chain.account(address) {
            Ok(account) => account?,
            Err(error) => {
                warn!("account fetch failed for {address}: {error}");
                return None;
            }
        };
        match T::try_deserialize(&mut account.data.as_slice()) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!("account decode failed for {address}: {error}");
                None
            }
        }
    }
}

fn render<T: fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "no data".to_string(),
    }
}
