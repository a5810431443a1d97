#![cfg(test)]

// ---------------------------------------------------------------------------
// Token test suite
//
// Structure
// ─────────
// 1. math      : checked U256 helpers (no contract needed)
// 2. ledger    : balance behaviour through the contract client
// 3. allowance : approve / transfer_from / burn_from
// 4. events    : transfer and approve event payloads
// 5. admin     : initialization, supply policy, controller rotation, auth
// 6. atomicity : ledger functions leave state untouched on error
// ---------------------------------------------------------------------------

mod math;

use soroban_sdk::{
    testutils::{Address as _, Events as _},
    Address, Env, String, Symbol, TryFromVal, Val, Vec, U256,
};

use crate::{SupplyPolicy, Token, TokenClient};

pub(crate) struct Setup<'a> {
    pub env: Env,
    pub client: TokenClient<'a>,
    pub contract_id: Address,
    pub controller: Address,
}

/// Registers and initializes a "My Token" / "MTK" contract with 18 decimals.
pub(crate) fn setup<'a>(policy: SupplyPolicy) -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, Token);
    let client = TokenClient::new(&env, &contract_id);
    let controller = Address::generate(&env);

    client.initialize(
        &controller,
        &18,
        &String::from_str(&env, "My Token"),
        &String::from_str(&env, "MTK"),
        &policy,
    );

    Setup { env, client, contract_id, controller }
}

/// `whole` tokens at 18 decimals.
pub(crate) fn ether(env: &Env, whole: u128) -> U256 {
    U256::from_u128(env, whole * 1_000_000_000_000_000_000)
}

pub(crate) fn amount(env: &Env, raw: u32) -> U256 {
    U256::from_u32(env, raw)
}

/// Events published by `contract_id` whose first topic is `name`, oldest first.
pub(crate) fn events_named(
    env: &Env,
    contract_id: &Address,
    name: Symbol,
) -> std::vec::Vec<(Vec<Val>, Val)> {
    env.events()
        .all()
        .iter()
        .filter(|(contract, topics, _)| {
            contract == contract_id
                && topics
                    .get(0)
                    .and_then(|topic| Symbol::try_from_val(env, &topic).ok())
                    .map_or(false, |topic| topic == name)
        })
        .map(|(_, topics, data)| (topics, data))
        .collect()
}

pub(crate) fn decode_amount(env: &Env, data: &Val) -> U256 {
    U256::try_from_val(env, data).unwrap()
}
