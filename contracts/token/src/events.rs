use soroban_sdk::{symbol_short, Address, Env, U256};

pub struct TokenEvents;

impl TokenEvents {
    /// Emits a `transfer` event for every balance movement, including mints
    /// (`from` = zero address) and burns (`to` = zero address).
    ///
    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: &U256) {
        env.events()
            .publish((symbol_short!("transfer"), from.clone(), to.clone()), amount.clone());
    }

    /// Emits an `approve` event carrying the allowance after the change.
    ///
    /// Topics: `("approve", owner, spender)`
    /// Data:   `amount`
    pub fn approval(env: &Env, owner: &Address, spender: &Address, amount: &U256) {
        env.events()
            .publish((symbol_short!("approve"), owner.clone(), spender.clone()), amount.clone());
    }

    pub fn controller_changed(env: &Env, previous: &Address, controller: &Address) {
        env.events()
            .publish((symbol_short!("set_ctrl"), previous.clone()), controller.clone());
    }
}
