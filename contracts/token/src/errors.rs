use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 300,
    NotInitialized = 301,
    Unauthorized = 302,
    InvalidRecipient = 303,
    InvalidSender = 304,
    InvalidSpender = 305,
    InsufficientBalance = 306,
    InsufficientAllowance = 307,
    Overflow = 308,
    Underflow = 309,
    InvalidDecimals = 310,
}

impl TokenError {
    /// Revert reason in the phrasing ERC20 callers match against.
    pub fn message(&self) -> &'static str {
        match self {
            TokenError::AlreadyInitialized => "token: already initialized",
            TokenError::NotInitialized => "token: not initialized",
            TokenError::Unauthorized => "Ownable: caller is not the owner",
            TokenError::InvalidRecipient => "ERC20: transfer to the zero address",
            TokenError::InvalidSender => "ERC20: transfer from the zero address",
            TokenError::InvalidSpender => "ERC20: approve to the zero address",
            TokenError::InsufficientBalance => "ERC20: transfer amount exceeds balance",
            TokenError::InsufficientAllowance => "ERC20: insufficient allowance",
            TokenError::Overflow => "arithmetic overflow",
            TokenError::Underflow => "ERC20: decreased allowance below zero",
            TokenError::InvalidDecimals => "token: decimals exceed 18",
        }
    }
}
