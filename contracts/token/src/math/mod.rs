//! Checked arithmetic over the host's 256-bit unsigned integer.
//!
//! `U256::add` / `U256::sub` trap inside the host on overflow, which would
//! abort the invocation without a typed error. Every ledger mutation goes
//! through these helpers instead so range violations surface as
//! `TokenError::Overflow` / `TokenError::Underflow`.

use soroban_sdk::{Env, U256};

use crate::errors::TokenError;

/// Largest representable amount (2^256 - 1).
pub fn max_amount(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

pub fn zero(env: &Env) -> U256 {
    U256::from_u32(env, 0)
}

/// `a + b`, or `Overflow` if the sum exceeds 2^256 - 1.
pub fn checked_add(env: &Env, a: &U256, b: &U256) -> Result<U256, TokenError> {
    // headroom = MAX - a never underflows.
    let headroom = max_amount(env).sub(a);
    if *b > headroom {
        return Err(TokenError::Overflow);
    }
    Ok(a.add(b))
}

/// `a - b`, or `Underflow` if `b > a`.
pub fn checked_sub(a: &U256, b: &U256) -> Result<U256, TokenError> {
    if *b > *a {
        return Err(TokenError::Underflow);
    }
    Ok(a.sub(b))
}
