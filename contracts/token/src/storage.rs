use soroban_sdk::{contracttype, Address, Env, U256};

use crate::math;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const ENTRY_LIFETIME_THRESHOLD: u32 = 17280;
const ENTRY_BUMP_AMOUNT: u32 = 518400;

/// Who may mint and burn.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SupplyPolicy {
    /// Any authenticated caller may mint to anyone and burn its own balance.
    Open,
    /// Only the configured controller may mint or burn.
    ControllerOnly,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TokenConfig {
    pub controller: Address,
    pub supply_policy: SupplyPolicy,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceKey),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<TokenConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &TokenConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_total_supply(env: &Env) -> U256 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or_else(|| math::zero(env))
}

pub fn set_total_supply(env: &Env, supply: &U256) {
    env.storage().instance().set(&DataKey::TotalSupply, supply);
}

/// Absent balances read as zero.
pub fn get_balance(env: &Env, id: &Address) -> U256 {
    let key = DataKey::Balance(id.clone());
    read_persistent(env, &key)
}

pub fn set_balance(env: &Env, id: &Address, amount: &U256) {
    let key = DataKey::Balance(id.clone());
    write_persistent(env, &key, amount);
}

/// Absent allowances read as zero.
pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> U256 {
    let key = DataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    read_persistent(env, &key)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: &U256) {
    let key = DataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    write_persistent(env, &key, amount);
}

fn read_persistent(env: &Env, key: &DataKey) -> U256 {
    match env.storage().persistent().get::<DataKey, U256>(key) {
        Some(amount) => {
            env.storage()
                .persistent()
                .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
            amount
        }
        None => math::zero(env),
    }
}

fn write_persistent(env: &Env, key: &DataKey, amount: &U256) {
    env.storage().persistent().set(key, amount);
    env.storage()
        .persistent()
        .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
