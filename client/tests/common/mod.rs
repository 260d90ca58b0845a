#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use anchor_lang::AccountSerialize;
use anchor_spl::associated_token::spl_associated_token_account;
use anchor_spl::token;
use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use dmd_client::constants::PROGRAM_ID;
use dmd_client::state::{BuyerState, Vault};
use dmd_client::{ChainClient, ChainError};

#[derive(Default)]
struct MockState {
    accounts: HashMap<Pubkey, Account>,
    sent: Vec<Transaction>,
    reads: usize,
    blockhash_calls: usize,
    failures: VecDeque<ChainError>,
}

/// Scripted chain. Accounts are whatever the test plants; submitted
/// transactions are recorded, and an associated-token-account creation
/// takes effect so a later read sees the account. Clones share state,
/// so a test can keep one handle while the session owns the other.
#[derive(Clone, Default)]
pub struct MockChain {
    state: Rc<RefCell<MockState>>,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, address: Pubkey, account: Account) {
        self.state.borrow_mut().accounts.insert(address, account);
    }

    /// Queue an error for the next submission; later ones succeed again.
    pub fn fail_next_send(&self, error: ChainError) {
        self.state.borrow_mut().failures.push_back(error);
    }

    pub fn sent(&self) -> Vec<Transaction> {
        self.state.borrow().sent.clone()
    }

    pub fn sends(&self) -> usize {
        self.state.borrow().sent.len()
    }

    pub fn reads(&self) -> usize {
        self.state.borrow().reads
    }

    pub fn blockhash_calls(&self) -> usize {
        self.state.borrow().blockhash_calls
    }
}

impl ChainClient for MockChain {
    fn account(&self, address: &Pubkey) -> Result<Option<Account>, ChainError> {
        let mut state = self.state.borrow_mut();
        state.reads += 1;
        Ok(state.accounts.get(address).cloned())
    }

    fn latest_blockhash(&self) -> Result<Hash, ChainError> {
        self.state.borrow_mut().blockhash_calls += 1;
        Ok(Hash::default())
    }

    fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, ChainError> {
        let mut state = self.state.borrow_mut();
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let message = &transaction.message;
        for instruction in &message.instructions {
            let program = message.account_keys[instruction.program_id_index as usize];
            if program == spl_associated_token_account::ID {
                let address = message.account_keys[instruction.accounts[1] as usize];
                state.accounts.insert(address, token_account_stub());
            }
        }
        state.sent.push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}

/// Flatten a submitted transaction back into
/// `(program, accounts, data)` triples for assertions.
pub fn decompiled(transaction: &Transaction) -> Vec<(Pubkey, Vec<Pubkey>, Vec<u8>)> {
    let keys = &transaction.message.account_keys;
    transaction
        .message
        .instructions
        .iter()
        .map(|instruction| {
            (
                keys[instruction.program_id_index as usize],
                instruction
                    .accounts
                    .iter()
                    .map(|&index| keys[index as usize])
                    .collect(),
                instruction.data.clone(),
            )
        })
        .collect()
}

pub fn token_account_stub() -> Account {
    Account::new(2_039_280, 165, &token::ID)
}

pub fn vault_account(vault: &Vault) -> Account {
    let mut data = Vec::new();
    vault.try_serialize(&mut data).unwrap();
    record_account(data)
}

pub fn buyer_state_account(buyer_state: &BuyerState) -> Account {
    let mut data = Vec::new();
    buyer_state.try_serialize(&mut data).unwrap();
    record_account(data)
}

fn record_account(data: Vec<u8>) -> Account {
    Account {
        lamports: 9_000_000,
        data,
        owner: PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    }
}
