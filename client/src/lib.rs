//! Client for the DMD presale vault program deployed on Solana devnet.
//!
//! The on-chain program already exists; this crate only speaks its wire
//! format: it derives the program's addresses, builds its instructions
//! byte-for-byte, and decodes its two account records. [`Session`] is
//! the entry point: connect a signer, drive the program surface, read
//! the fetched snapshots and the [`ActionLog`] of every attempt.
//!
//! ```no_run
//! # fn main() -> Result<(), dmd_client::ChainError> {
//! use dmd_client::Session;
//!
//! let mut session = Session::devnet();
//! session.connect_keypair_file("founder.json")?;
//! session.initialize(2.0);
//! session.buy(0.5);
//! session.refresh();
//! println!("{}", session.vault_panel());
//! for entry in session.log().entries() {
//!     println!("{entry}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod session;
pub mod state;

pub use chain::ChainClient;
pub use errors::ChainError;
pub use pda::Pdas;
pub use session::{ActionLog, LogEntry, Routing, Session};
pub use state::{BuyerState, Vault};
