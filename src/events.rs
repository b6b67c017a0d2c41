//! Event emission helpers for the member registry contract.

use soroban_sdk::{Address, Env, String, Symbol};

/// Emit an event when a wallet registers a new profile.
pub fn emit_registered(env: &Env, wallet: &Address, id: u64) {
    let topics = (Symbol::new(env, "registered"),);
    env.events().publish(topics, (wallet.clone(), id));
}

/// Emit an event when a profile is approved.
pub fn emit_approved(env: &Env, id: u64) {
    let topics = (Symbol::new(env, "approved"),);
    env.events().publish(topics, id);
}

/// Emit an event when an approved profile is banned.
pub fn emit_banned(env: &Env, id: u64) {
    let topics = (Symbol::new(env, "banned"),);
    env.events().publish(topics, id);
}

/// Emit an event when a member links an additional wallet.
pub fn emit_wallet_linked(env: &Env, wallet: &Address, id: u64) {
    let topics = (Symbol::new(env, "wallet_linked"),);
    env.events().publish(topics, (wallet.clone(), id));
}

/// Emit an event when the administrator attaches a recovery wallet.
pub fn emit_profile_recovered(env: &Env, wallet: &Address, id: u64) {
    let topics = (Symbol::new(env, "profile_recovered"),);
    env.events().publish(topics, (wallet.clone(), id));
}

/// Emit an event when a member edits their profile pointer.
pub fn emit_edited(env: &Env, wallet: &Address, id: u64, profile_cid: &String) {
    let topics = (Symbol::new(env, "edited"),);
    env.events()
        .publish(topics, (wallet.clone(), id, profile_cid.clone()));
}

/// Emit an event when the governance authority is recorded.
pub fn emit_governance_set(env: &Env, governance: &Address) {
    let topics = (Symbol::new(env, "governance_set"),);
    env.events().publish(topics, governance.clone());
}

/// Emit an event when the administrator role moves to governance.
pub fn emit_admin_transferred(env: &Env, previous: &Address, new: &Address) {
    let topics = (Symbol::new(env, "admin_transferred"),);
    env.events().publish(topics, (previous.clone(), new.clone()));
}
