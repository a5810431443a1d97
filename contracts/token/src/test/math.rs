use soroban_sdk::{Env, U256};

use crate::errors::TokenError;
use crate::math::{checked_add, checked_sub, max_amount, zero};

#[test]
fn add_within_range() {
    let env = Env::default();
    let a = U256::from_u32(&env, 40);
    let b = U256::from_u32(&env, 2);
    assert_eq!(checked_add(&env, &a, &b), Ok(U256::from_u32(&env, 42)));
}

#[test]
fn add_up_to_max_is_allowed() {
    let env = Env::default();
    let max = max_amount(&env);
    let one = U256::from_u32(&env, 1);
    let almost = max.sub(&one);
    assert_eq!(checked_add(&env, &almost, &one), Ok(max.clone()));
    assert_eq!(checked_add(&env, &max, &zero(&env)), Ok(max));
}

#[test]
fn add_past_max_overflows() {
    let env = Env::default();
    let max = max_amount(&env);
    let one = U256::from_u32(&env, 1);
    assert_eq!(checked_add(&env, &max, &one), Err(TokenError::Overflow));
    assert_eq!(checked_add(&env, &one, &max), Err(TokenError::Overflow));
}

#[test]
fn sub_to_zero_is_allowed() {
    let env = Env::default();
    let a = U256::from_u32(&env, 7);
    assert_eq!(checked_sub(&a, &a), Ok(zero(&env)));
}

#[test]
fn sub_below_zero_underflows() {
    let env = Env::default();
    let a = U256::from_u32(&env, 7);
    let b = U256::from_u32(&env, 8);
    assert_eq!(checked_sub(&a, &b), Err(TokenError::Underflow));
}
