use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::rpc_request::{RpcError, RpcResponseErrorData};
use solana_sdk::signer::SignerError;
use thiserror::Error;

/// Everything a client action can fail with. Account absence is not in
/// here: a missing account is an ordinary `Ok(None)` at the chain seam.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The endpoint could not be reached or rejected the request itself.
    #[error("rpc: {0}")]
    Rpc(ClientError),

    /// The wallet refused or was unable to sign.
    #[error("signing failed: {0}")]
    Signer(#[from] SignerError),

    /// The program rejected the instruction. `message` carries the
    /// structured error text when one could be recovered from the logs.
    #[error("{message}")]
    Program { message: String },

    /// Action invoked with no wallet connected.
    #[error("wallet not connected")]
    WalletDisconnected,
}

impl From<ClientError> for ChainError {
    fn from(error: ClientError) -> Self {
        match program_rejection(&error) {
            Some(message) => ChainError::Program { message },
            None => ChainError::Rpc(error),
        }
    }
}

/// Best-effort recovery of the rejection text buried in an RPC error:
/// prefer the Anchor `Error Message:` log line, then the transaction
/// error itself. `None` means the failure was transport-level.
fn program_rejection(error: &ClientError) -> Option<String> {
    if let ClientErrorKind::RpcError(RpcError::RpcResponseError {
        data: RpcResponseErrorData::SendTransactionPreflightFailure(simulation),
        ..
    }) = &error.kind
    {
        if let Some(message) = simulation.logs.as_deref().and_then(anchor_error_message) {
            return Some(message);
        }
        if let Some(err) = &simulation.err {
            return Some(err.to_string());
        }
    }
    error.get_transaction_error().map(|err| err.to_string())
}

/// Anchor programs report rejections as
/// `Program log: AnchorError ... Error Message: <text>.`; pull `<text>`
/// out of the transaction logs.
pub fn anchor_error_message(logs: &[String]) -> Option<String> {
    logs.iter().rev().find_map(|line| {
        let (_, message) = line.split_once("Error Message: ")?;
        Some(message.strip_suffix('.').unwrap_or(message).to_string())
    })
}
