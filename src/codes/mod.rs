pub mod classify;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use strum::IntoEnumIterator;

pub use classify::{RpcError, UNCLASSIFIED_NAME, classify};

/// Grouping of error codes, following the sections of bitcoind's `rpc/protocol.h`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorFamily {
    /// Standard JSON-RPC 2.0 errors. Never raised for application-level failures.
    Protocol,
    /// General application defined errors.
    General,
    /// P2P client errors.
    Client,
    Wallet,
}

/// A named error condition reported by the node.
///
/// `Display`/`FromStr` use the canonical upstream identifier (e.g.
/// `RPC_WALLET_INSUFFICIENT_FUNDS`). The numeric code is available through
/// [`RpcErrorKind::code`] and the reverse lookup through [`RpcErrorKind::from_code`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
)]
pub enum RpcErrorKind {
    #[strum(serialize = "RPC_INVALID_REQUEST")]
    InvalidRequest,
    #[strum(serialize = "RPC_METHOD_NOT_FOUND")]
    MethodNotFound,
    #[strum(serialize = "RPC_INVALID_PARAMS")]
    InvalidParams,
    #[strum(serialize = "RPC_INTERNAL_ERROR")]
    InternalError,
    #[strum(serialize = "RPC_PARSE_ERROR")]
    ParseError,

    #[strum(serialize = "RPC_MISC_ERROR")]
    MiscError,
    #[strum(serialize = "RPC_TYPE_ERROR")]
    TypeError,
    #[strum(serialize = "RPC_INVALID_ADDRESS_OR_KEY")]
    InvalidAddressOrKey,
    #[strum(serialize = "RPC_OUT_OF_MEMORY")]
    OutOfMemory,
    #[strum(serialize = "RPC_INVALID_PARAMETER")]
    InvalidParameter,
    #[strum(serialize = "RPC_DATABASE_ERROR")]
    DatabaseError,
    #[strum(serialize = "RPC_DESERIALIZATION_ERROR")]
    DeserializationError,
    #[strum(serialize = "RPC_VERIFY_ERROR")]
    VerifyError,
    #[strum(serialize = "RPC_VERIFY_REJECTED")]
    VerifyRejected,
    #[strum(serialize = "RPC_VERIFY_ALREADY_IN_CHAIN")]
    VerifyAlreadyInChain,
    #[strum(serialize = "RPC_IN_WARMUP")]
    InWarmup,
    #[strum(serialize = "RPC_METHOD_DEPRECATED")]
    MethodDeprecated,

    #[strum(serialize = "RPC_CLIENT_NOT_CONNECTED")]
    ClientNotConnected,
    #[strum(serialize = "RPC_CLIENT_IN_INITIAL_DOWNLOAD")]
    ClientInInitialDownload,
    #[strum(serialize = "RPC_CLIENT_NODE_ALREADY_ADDED")]
    ClientNodeAlreadyAdded,
    #[strum(serialize = "RPC_CLIENT_NODE_NOT_ADDED")]
    ClientNodeNotAdded,
    #[strum(serialize = "RPC_CLIENT_NODE_NOT_CONNECTED")]
    ClientNodeNotConnected,
    #[strum(serialize = "RPC_CLIENT_INVALID_IP_OR_SUBNET")]
    ClientInvalidIpOrSubnet,
    #[strum(serialize = "RPC_CLIENT_P2P_DISABLED")]
    ClientP2pDisabled,

    #[strum(serialize = "RPC_WALLET_ERROR")]
    WalletError,
    #[strum(serialize = "RPC_WALLET_INSUFFICIENT_FUNDS")]
    WalletInsufficientFunds,
    #[strum(serialize = "RPC_WALLET_INVALID_LABEL_NAME")]
    WalletInvalidLabelName,
    #[strum(serialize = "RPC_WALLET_KEYPOOL_RAN_OUT")]
    WalletKeypoolRanOut,
    #[strum(serialize = "RPC_WALLET_UNLOCK_NEEDED")]
    WalletUnlockNeeded,
    #[strum(serialize = "RPC_WALLET_PASSPHRASE_INCORRECT")]
    WalletPassphraseIncorrect,
    #[strum(serialize = "RPC_WALLET_WRONG_ENC_STATE")]
    WalletWrongEncState,
    #[strum(serialize = "RPC_WALLET_ENCRYPTION_FAILED")]
    WalletEncryptionFailed,
    #[strum(serialize = "RPC_WALLET_ALREADY_UNLOCKED")]
    WalletAlreadyUnlocked,
    #[strum(serialize = "RPC_WALLET_NOT_FOUND")]
    WalletNotFound,
    #[strum(serialize = "RPC_WALLET_NOT_SPECIFIED")]
    WalletNotSpecified,
}

static ERROR_TABLE: LazyLock<BTreeMap<i32, RpcErrorKind>> =
    LazyLock::new(|| RpcErrorKind::iter().map(|k| (k.code(), k)).collect());

/// Read-only code -> kind table covering every documented code.
pub fn error_table() -> &'static BTreeMap<i32, RpcErrorKind> {
    &ERROR_TABLE
}

impl RpcErrorKind {
    /// Looks up the kind for a raw code. `None` for codes outside the table.
    pub fn from_code(code: i32) -> Option<Self> {
        ERROR_TABLE.get(&code).copied()
    }

    /// Canonical numeric code for this kind.
    pub fn code(self) -> i32 {
        match self {
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::ParseError => -32700,

            Self::MiscError => -1,
            Self::TypeError => -3,
            Self::InvalidAddressOrKey => -5,
            Self::OutOfMemory => -7,
            Self::InvalidParameter => -8,
            Self::DatabaseError => -20,
            Self::DeserializationError => -22,
            Self::VerifyError => -25,
            Self::VerifyRejected => -26,
            Self::VerifyAlreadyInChain => -27,
            Self::InWarmup => -28,
            Self::MethodDeprecated => -32,

            Self::ClientNotConnected => -9,
            Self::ClientInInitialDownload => -10,
            Self::ClientNodeAlreadyAdded => -23,
            Self::ClientNodeNotAdded => -24,
            Self::ClientNodeNotConnected => -29,
            Self::ClientInvalidIpOrSubnet => -30,
            Self::ClientP2pDisabled => -31,

            Self::WalletError => -4,
            Self::WalletInsufficientFunds => -6,
            Self::WalletInvalidLabelName => -11,
            Self::WalletKeypoolRanOut => -12,
            Self::WalletUnlockNeeded => -13,
            Self::WalletPassphraseIncorrect => -14,
            Self::WalletWrongEncState => -15,
            Self::WalletEncryptionFailed => -16,
            Self::WalletAlreadyUnlocked => -17,
            Self::WalletNotFound => -18,
            Self::WalletNotSpecified => -19,
        }
    }

    /// Canonical upstream identifier, e.g. `"RPC_IN_WARMUP"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn family(self) -> ErrorFamily {
        match self {
            Self::InvalidRequest
            | Self::MethodNotFound
            | Self::InvalidParams
            | Self::InternalError
            | Self::ParseError => ErrorFamily::Protocol,
            Self::MiscError
            | Self::TypeError
            | Self::InvalidAddressOrKey
            | Self::OutOfMemory
            | Self::InvalidParameter
            | Self::DatabaseError
            | Self::DeserializationError
            | Self::VerifyError
            | Self::VerifyRejected
            | Self::VerifyAlreadyInChain
            | Self::InWarmup
            | Self::MethodDeprecated => ErrorFamily::General,
            Self::ClientNotConnected
            | Self::ClientInInitialDownload
            | Self::ClientNodeAlreadyAdded
            | Self::ClientNodeNotAdded
            | Self::ClientNodeNotConnected
            | Self::ClientInvalidIpOrSubnet
            | Self::ClientP2pDisabled => ErrorFamily::Client,
            Self::WalletError
            | Self::WalletInsufficientFunds
            | Self::WalletInvalidLabelName
            | Self::WalletKeypoolRanOut
            | Self::WalletUnlockNeeded
            | Self::WalletPassphraseIncorrect
            | Self::WalletWrongEncState
            | Self::WalletEncryptionFailed
            | Self::WalletAlreadyUnlocked
            | Self::WalletNotFound
            | Self::WalletNotSpecified => ErrorFamily::Wallet,
        }
    }

    pub fn is_protocol_level(self) -> bool {
        self.family() == ErrorFamily::Protocol
    }

    /// One-line explanation of the condition as documented by bitcoind.
    pub fn description(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid JSON-RPC request (HTTP 400)",
            Self::MethodNotFound => "Method not found (HTTP 404)",
            Self::InvalidParams => "Invalid method parameters",
            Self::InternalError => "Internal node error, e.g. datadir corruption",
            Self::ParseError => "Request body could not be parsed",
            Self::MiscError => "std::exception thrown in command handling",
            Self::TypeError => "Unexpected type was passed as parameter",
            Self::InvalidAddressOrKey => "Invalid address or key",
            Self::OutOfMemory => "Ran out of memory during operation",
            Self::InvalidParameter => "Invalid, missing or duplicate parameter",
            Self::DatabaseError => "Database error",
            Self::DeserializationError => "Error parsing or validating structure in raw format",
            Self::VerifyError => "General error during transaction or block submission",
            Self::VerifyRejected => "Transaction or block was rejected by network rules",
            Self::VerifyAlreadyInChain => "Transaction already in chain",
            Self::InWarmup => "Client still warming up",
            Self::MethodDeprecated => "RPC method is deprecated",
            Self::ClientNotConnected => "Bitcoin is not connected",
            Self::ClientInInitialDownload => "Still downloading initial blocks",
            Self::ClientNodeAlreadyAdded => "Node is already added",
            Self::ClientNodeNotAdded => "Node has not been added before",
            Self::ClientNodeNotConnected => "Node to disconnect not found in connected nodes",
            Self::ClientInvalidIpOrSubnet => "Invalid IP/Subnet",
            Self::ClientP2pDisabled => "No valid connection manager instance found",
            Self::WalletError => "Unspecified problem with wallet (key not found etc.)",
            Self::WalletInsufficientFunds => "Not enough funds in wallet or account",
            Self::WalletInvalidLabelName => "Invalid label name",
            Self::WalletKeypoolRanOut => "Keypool ran out, call keypoolrefill first",
            Self::WalletUnlockNeeded => {
                "Enter the wallet passphrase with walletpassphrase first"
            }
            Self::WalletPassphraseIncorrect => "The wallet passphrase entered was incorrect",
            Self::WalletWrongEncState => {
                "Command given in wrong wallet encryption state (encrypting an encrypted wallet etc.)"
            }
            Self::WalletEncryptionFailed => "Failed to encrypt the wallet",
            Self::WalletAlreadyUnlocked => "Wallet is already unlocked",
            Self::WalletNotFound => "Invalid wallet specified",
            Self::WalletNotSpecified => {
                "No wallet specified (error when there are multiple wallets loaded)"
            }
        }
    }
}
