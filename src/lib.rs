#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod codes;
pub mod error;
pub mod status;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use codes::{ErrorFamily, RpcError, RpcErrorKind, UNCLASSIFIED_NAME, classify, error_table};
pub use error::Error;
pub use status::{NodeInfo, StatusSnapshot, WalletInfo};
pub use types::{ResponseError, RpcResponse};
