//! Balance and allowance bookkeeping.
//!
//! Every function here validates all of its preconditions before the first
//! storage write, so an `Err` leaves balances, allowances and supply exactly
//! as they were even when called outside a host invocation that would roll
//! back. Authorization is the caller's job (see `lib.rs`); these functions
//! only enforce the ledger invariants:
//!
//! * total supply equals the sum of all balances,
//! * no balance, allowance or supply leaves the unsigned 256-bit range,
//! * the zero address never holds, sends or approves tokens.

use soroban_sdk::{Address, Env, U256};

use crate::{
    errors::TokenError,
    events::TokenEvents,
    identity::{is_zero_address, zero_address},
    math::{checked_add, checked_sub, max_amount},
    storage::{
        get_allowance, get_balance, get_total_supply, set_allowance, set_balance,
        set_total_supply,
    },
};

fn require_sender(env: &Env, from: &Address) -> Result<(), TokenError> {
    if is_zero_address(env, from) {
        return Err(TokenError::InvalidSender);
    }
    Ok(())
}

fn require_recipient(env: &Env, to: &Address) -> Result<(), TokenError> {
    if is_zero_address(env, to) {
        return Err(TokenError::InvalidRecipient);
    }
    Ok(())
}

/// Creates `amount` new tokens owned by `to`.
///
/// # Errors
/// | Error              | Condition                                   |
/// |--------------------|---------------------------------------------|
/// | `InvalidRecipient` | `to` is the zero address                    |
/// | `Overflow`         | supply or balance would exceed 2^256 - 1    |
pub fn mint(env: &Env, to: &Address, amount: &U256) -> Result<(), TokenError> {
    require_recipient(env, to)?;

    let supply = checked_add(env, &get_total_supply(env), amount)?;
    let balance = checked_add(env, &get_balance(env, to), amount)?;

    set_total_supply(env, &supply);
    set_balance(env, to, &balance);

    TokenEvents::transfer(env, &zero_address(env), to, amount);
    Ok(())
}

/// Destroys `amount` tokens out of `from`'s balance.
///
/// # Errors
/// | Error                 | Condition                        |
/// |-----------------------|----------------------------------|
/// | `InvalidSender`       | `from` is the zero address       |
/// | `InsufficientBalance` | `amount` > balance of `from`     |
/// | `Underflow`           | `amount` > total supply          |
pub fn burn(env: &Env, from: &Address, amount: &U256) -> Result<(), TokenError> {
    require_sender(env, from)?;

    let balance = get_balance(env, from);
    if *amount > balance {
        return Err(TokenError::InsufficientBalance);
    }
    // Unreachable while supply == sum(balances), kept checked regardless.
    let supply = checked_sub(&get_total_supply(env), amount)?;
    let balance = checked_sub(&balance, amount)?;

    set_balance(env, from, &balance);
    set_total_supply(env, &supply);

    TokenEvents::transfer(env, from, &zero_address(env), amount);
    Ok(())
}

/// Moves `amount` from `from` to `to`. Total supply is untouched.
///
/// Checks run sender, recipient, then balance; only the first violation is
/// reported.
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: &U256) -> Result<(), TokenError> {
    require_sender(env, from)?;
    require_recipient(env, to)?;

    let from_balance = get_balance(env, from);
    if *amount > from_balance {
        return Err(TokenError::InsufficientBalance);
    }

    if from != to {
        let from_balance = checked_sub(&from_balance, amount)?;
        let to_balance = checked_add(env, &get_balance(env, to), amount)?;
        set_balance(env, from, &from_balance);
        set_balance(env, to, &to_balance);
    }

    TokenEvents::transfer(env, from, to, amount);
    Ok(())
}

/// Sets the allowance of `spender` over `owner`'s tokens to exactly `amount`,
/// replacing any previous value.
pub fn approve(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: &U256,
) -> Result<(), TokenError> {
    require_sender(env, owner)?;
    if is_zero_address(env, spender) {
        return Err(TokenError::InvalidSpender);
    }

    set_allowance(env, owner, spender, amount);
    TokenEvents::approval(env, owner, spender, amount);
    Ok(())
}

/// Raises an allowance by `added`; returns the new allowance.
pub fn increase_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    added: &U256,
) -> Result<U256, TokenError> {
    let allowance = checked_add(env, &get_allowance(env, owner, spender), added)?;
    approve(env, owner, spender, &allowance)?;
    Ok(allowance)
}

/// Lowers an allowance by `subtracted`; returns the new allowance.
/// Going below zero is an `Underflow`.
pub fn decrease_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    subtracted: &U256,
) -> Result<U256, TokenError> {
    let allowance = checked_sub(&get_allowance(env, owner, spender), subtracted)?;
    approve(env, owner, spender, &allowance)?;
    Ok(allowance)
}

/// Allowance left after `spender` uses `amount` of `owner`'s tokens, or
/// `None` when the allowance is unlimited (`2^256 - 1`) and stays as is.
fn remaining_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: &U256,
) -> Result<Option<U256>, TokenError> {
    let allowance = get_allowance(env, owner, spender);
    if allowance == max_amount(env) {
        return Ok(None);
    }
    if *amount > allowance {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(Some(checked_sub(&allowance, amount)?))
}

/// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
/// `spender`'s allowance over `from`.
///
/// # Errors
/// `InsufficientAllowance` first, then anything `transfer` reports.
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: &U256,
) -> Result<(), TokenError> {
    let remaining = remaining_allowance(env, from, spender, amount)?;
    transfer(env, from, to, amount)?;
    if let Some(remaining) = remaining {
        set_allowance(env, from, spender, &remaining);
    }
    Ok(())
}

/// Burns `amount` of `from`'s tokens on behalf of `spender`, consuming
/// `spender`'s allowance over `from`.
pub fn burn_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    amount: &U256,
) -> Result<(), TokenError> {
    let remaining = remaining_allowance(env, from, spender, amount)?;
    burn(env, from, amount)?;
    if let Some(remaining) = remaining {
        set_allowance(env, from, spender, &remaining);
    }
    Ok(())
}
