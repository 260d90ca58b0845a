use solana_client::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::errors::ChainError;

/// The slice of cluster behavior a [`Session`](crate::session::Session)
/// needs. Production code talks to the blocking [`RpcClient`]; tests
/// swap in their own implementation.
pub trait ChainClient {
    /// Fetch an account. `Ok(None)` means the address holds no account,
    /// which callers treat as "not created yet" rather than an error.
    fn account(&self, address: &Pubkey) -> Result<Option<Account>, ChainError>;

    fn latest_blockhash(&self) -> Result<Hash, ChainError>;

    /// Submit a signed transaction and wait for confirmation.
    fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, ChainError>;
}

impl ChainClient for RpcClient {
    fn account(&self, address: &Pubkey) -> Result<Option<Account>, ChainError> {
        let response = self.get_account_with_commitment(address, self.commitment())?;
        Ok(response.value)
    }

    fn latest_blockhash(&self) -> Result<Hash, ChainError> {
        Ok(self.get_latest_blockhash()?)
    }

    fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, ChainError> {
        Ok(self.send_and_confirm_transaction(transaction)?)
    }
}
