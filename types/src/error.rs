use thiserror::Error;

/// User-facing betting errors.
///
/// All variants are non-fatal and leave engine state unchanged; the caller
/// surfaces the message and re-prompts. The display strings double as the
/// status lines shown by the table UI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BetError {
    /// A bet was placed before any chip denomination was chosen.
    #[error("no chip selected")]
    NoChipSelected,
    /// A spin was requested with an empty bet set.
    #[error("no bet placed")]
    EmptyBetSet,
    /// The staked total exceeds the account balance.
    #[error("insufficient balance")]
    InsufficientBalance { stake: u64, balance: u64 },
}
