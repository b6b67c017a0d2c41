//! Storage key definitions and accessors for the member registry.

use soroban_sdk::{contracttype, Address, Env};

use crate::profile::Profile;

/// Storage keys for the member registry contract.
///
/// Registry-wide settings and counters live in instance storage; profiles and
/// wallet bindings live in persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Address currently holding administrative capability.
    Admin,

    /// Administrator configured at `init`. Never changes.
    InitialAdmin,

    /// Governance authority that receives the administrator role.
    Governance,

    /// Number of profiles ever created (also the last assigned id).
    UserCount,

    /// Cumulative number of approvals granted. Bans do not decrement it.
    ApprovedCount,

    /// Set once the administrator role has moved to governance.
    HandoverDone,

    /// Maps profile id to Profile struct.
    Profile(u64),

    /// Maps a wallet to the id of the profile it is bound to.
    Wallet(Address),
}

/// Time-to-live for profile data in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&RegistryKey::Admin)
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RegistryKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&RegistryKey::Admin, admin);
}

pub fn read_initial_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RegistryKey::InitialAdmin)
}

pub fn write_initial_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&RegistryKey::InitialAdmin, admin);
}

pub fn has_governance(env: &Env) -> bool {
    env.storage().instance().has(&RegistryKey::Governance)
}

pub fn read_governance(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RegistryKey::Governance)
}

pub fn write_governance(env: &Env, governance: &Address) {
    env.storage()
        .instance()
        .set(&RegistryKey::Governance, governance);
}

pub fn read_user_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::UserCount)
        .unwrap_or(0)
}

pub fn write_user_count(env: &Env, count: u64) {
    env.storage().instance().set(&RegistryKey::UserCount, &count);
}

pub fn read_approved_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::ApprovedCount)
        .unwrap_or(0)
}

pub fn write_approved_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&RegistryKey::ApprovedCount, &count);
}

pub fn read_handover_done(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&RegistryKey::HandoverDone)
        .unwrap_or(false)
}

pub fn write_handover_done(env: &Env, done: bool) {
    env.storage()
        .instance()
        .set(&RegistryKey::HandoverDone, &done);
}

pub fn read_profile(env: &Env, id: u64) -> Option<Profile> {
    env.storage().persistent().get(&RegistryKey::Profile(id))
}

/// Store a profile and extend its TTL.
pub fn write_profile(env: &Env, profile: &Profile) {
    let key = RegistryKey::Profile(profile.id);
    env.storage().persistent().set(&key, profile);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

/// Profile id bound to `wallet`, or 0 when the wallet is unbound.
pub fn read_profile_id(env: &Env, wallet: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&RegistryKey::Wallet(wallet.clone()))
        .unwrap_or(0)
}

/// Record `wallet -> id` and extend its TTL. The caller is responsible for
/// appending the wallet to the profile's wallet list in the same invocation.
pub fn write_wallet_binding(env: &Env, wallet: &Address, id: u64) {
    let key = RegistryKey::Wallet(wallet.clone());
    env.storage().persistent().set(&key, &id);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}
