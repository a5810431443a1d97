use soroban_sdk::{Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

/// Highest precision accepted at initialization (ERC20 default).
pub const MAX_DECIMALS: u32 = 18;

pub fn write_metadata(env: &Env, decimals: u32, name: String, symbol: String) {
    TokenUtils::new(env).metadata().set_metadata(&TokenMetadata {
        decimal: decimals,
        name,
        symbol,
    });
}

pub fn read_name(env: &Env) -> String {
    TokenUtils::new(env).metadata().get_metadata().name
}

pub fn read_symbol(env: &Env) -> String {
    TokenUtils::new(env).metadata().get_metadata().symbol
}

pub fn read_decimals(env: &Env) -> u32 {
    TokenUtils::new(env).metadata().get_metadata().decimal
}
