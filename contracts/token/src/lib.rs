#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod identity;
mod ledger;
mod math;
mod metadata;
mod storage;

#[cfg(test)]
mod test;

pub use errors::TokenError;
pub use storage::SupplyPolicy;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, U256};
use storage::TokenConfig;

#[contract]
pub struct Token;

fn load_config(env: &Env) -> Result<TokenConfig, TokenError> {
    let config = storage::get_config(env).ok_or(TokenError::NotInitialized)?;
    storage::extend_instance_ttl(env);
    Ok(config)
}

/// Applies the configured supply policy to a mint or burn by `caller`.
fn require_supply_authority(config: &TokenConfig, caller: &Address) -> Result<(), TokenError> {
    match config.supply_policy {
        SupplyPolicy::Open => Ok(()),
        SupplyPolicy::ControllerOnly if *caller == config.controller => Ok(()),
        SupplyPolicy::ControllerOnly => Err(TokenError::Unauthorized),
    }
}

#[contractimpl]
impl Token {
    pub fn initialize(
        env: Env,
        controller: Address,
        decimals: u32,
        name: String,
        symbol: String,
        supply_policy: SupplyPolicy,
    ) -> Result<(), TokenError> {
        if storage::has_config(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        if decimals > metadata::MAX_DECIMALS {
            return Err(TokenError::InvalidDecimals);
        }

        metadata::write_metadata(&env, decimals, name, symbol);
        storage::set_config(&env, &TokenConfig { controller: controller.clone(), supply_policy });
        storage::set_total_supply(&env, &math::zero(&env));
        storage::extend_instance_ttl(&env);

        log!(&env, "token initialized", controller, supply_policy);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Metadata and configuration views
    // ---------------------------------------------------------------------

    pub fn name(env: Env) -> Result<String, TokenError> {
        load_config(&env)?;
        Ok(metadata::read_name(&env))
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        load_config(&env)?;
        Ok(metadata::read_symbol(&env))
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        load_config(&env)?;
        Ok(metadata::read_decimals(&env))
    }

    pub fn controller(env: Env) -> Result<Address, TokenError> {
        Ok(load_config(&env)?.controller)
    }

    pub fn supply_policy(env: Env) -> Result<SupplyPolicy, TokenError> {
        Ok(load_config(&env)?.supply_policy)
    }

    /// The reserved address that appears as `from` on mints and `to` on burns.
    pub fn zero_address(env: Env) -> Address {
        identity::zero_address(&env)
    }

    // ---------------------------------------------------------------------
    // Ledger views
    // ---------------------------------------------------------------------

    pub fn total_supply(env: Env) -> U256 {
        storage::get_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> U256 {
        storage::get_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> U256 {
        storage::get_allowance(&env, &owner, &spender)
    }

    // ---------------------------------------------------------------------
    // Supply changes
    // ---------------------------------------------------------------------

    /// Mints `amount` to `to`. Under `SupplyPolicy::ControllerOnly` only the
    /// controller may call this.
    pub fn mint(env: Env, caller: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        caller.require_auth();
        let config = load_config(&env)?;
        require_supply_authority(&config, &caller)?;
        ledger::mint(&env, &to, &amount)
    }

    /// Burns `amount` of the caller's own balance.
    pub fn burn(env: Env, caller: Address, amount: U256) -> Result<(), TokenError> {
        caller.require_auth();
        let config = load_config(&env)?;
        require_supply_authority(&config, &caller)?;
        ledger::burn(&env, &caller, &amount)
    }

    /// Burns `amount` of `from`'s balance against the caller's allowance.
    /// The allowance is the holder's consent, so the supply policy does not
    /// apply.
    pub fn burn_from(
        env: Env,
        caller: Address,
        from: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        load_config(&env)?;
        ledger::burn_from(&env, &caller, &from, &amount)
    }

    // ---------------------------------------------------------------------
    // Transfers and allowances
    // ---------------------------------------------------------------------

    pub fn transfer(env: Env, caller: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        caller.require_auth();
        load_config(&env)?;
        ledger::transfer(&env, &caller, &to, &amount)
    }

    /// Alias of `transfer`.
    pub fn send(env: Env, caller: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        Self::transfer(env, caller, to, amount)
    }

    pub fn transfer_from(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        load_config(&env)?;
        ledger::transfer_from(&env, &caller, &from, &to, &amount)
    }

    /// Sets `spender`'s allowance over the owner's tokens to `amount`,
    /// replacing the previous value.
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        owner.require_auth();
        load_config(&env)?;
        ledger::approve(&env, &owner, &spender, &amount)
    }

    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        added: U256,
    ) -> Result<U256, TokenError> {
        owner.require_auth();
        load_config(&env)?;
        ledger::increase_allowance(&env, &owner, &spender, &added)
    }

    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        subtracted: U256,
    ) -> Result<U256, TokenError> {
        owner.require_auth();
        load_config(&env)?;
        ledger::decrease_allowance(&env, &owner, &spender, &subtracted)
    }

    // ---------------------------------------------------------------------
    // Administration
    // ---------------------------------------------------------------------

    /// Hands the controller role to `new_controller`. Requires the current
    /// controller's authorization.
    pub fn set_controller(env: Env, new_controller: Address) -> Result<(), TokenError> {
        let mut config = load_config(&env)?;
        config.controller.require_auth();
        if identity::is_zero_address(&env, &new_controller) {
            return Err(TokenError::InvalidRecipient);
        }

        let previous = config.controller.clone();
        config.controller = new_controller.clone();
        storage::set_config(&env, &config);

        events::TokenEvents::controller_changed(&env, &previous, &new_controller);
        log!(&env, "controller changed", previous, new_controller);
        Ok(())
    }
}
