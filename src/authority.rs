//! Administrator capability and the one-shot governance handover.
//!
//! The administrator starts as the address passed to `init`. It changes
//! exactly once, to the governance authority, inside the approval that makes
//! the cumulative approval count reach `HANDOVER_THRESHOLD`. The transition
//! is guarded by the `HandoverDone` flag, not by re-reading the counter, so
//! later approvals can never fire it again.

use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::storage;
use crate::RegistryError;

/// Number of approvals after which the administrator role moves to governance.
pub const HANDOVER_THRESHOLD: u64 = 5;

/// Current administrator. Panics if the contract is not initialized.
pub fn admin(env: &Env) -> Address {
    storage::read_admin(env)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized))
}

/// Require `caller` to be the current administrator and to have authorized
/// the invocation.
pub fn require_admin(env: &Env, caller: &Address) {
    if *caller != admin(env) {
        panic_with_error!(env, RegistryError::Unauthorized);
    }

    caller.require_auth();
}

/// Record the governance authority. Only the initial administrator may call
/// this, and only once. Does not move the administrator role.
pub fn set_governance(env: &Env, governance: &Address, caller: &Address) {
    let initial = storage::read_initial_admin(env)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized));

    if *caller != initial {
        panic_with_error!(env, RegistryError::Unauthorized);
    }

    caller.require_auth();

    if storage::has_governance(env) {
        panic_with_error!(env, RegistryError::AlreadyInitialized);
    }

    storage::write_governance(env, governance);
}

/// Fail with `GovernanceNotSet` if the next approval would trigger the
/// handover but there is nobody to hand over to.
///
/// Must run before any write of the approval so a rejected approval leaves
/// no trace.
pub fn check_handover_ready(env: &Env) {
    if storage::read_handover_done(env) {
        return;
    }

    let next = storage::read_approved_count(env) + 1;
    if next >= HANDOVER_THRESHOLD && storage::read_governance(env).is_none() {
        panic_with_error!(env, RegistryError::GovernanceNotSet);
    }
}

/// Count one approval and, if this is the approval that reaches the
/// threshold, move the administrator role to governance.
///
/// Returns `(previous, new)` administrators when the handover happened.
pub fn record_approval(env: &Env) -> Option<(Address, Address)> {
    let approved = storage::read_approved_count(env) + 1;
    storage::write_approved_count(env, approved);

    if storage::read_handover_done(env) || approved < HANDOVER_THRESHOLD {
        return None;
    }

    let governance = storage::read_governance(env)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::GovernanceNotSet));
    let previous = admin(env);

    storage::write_admin(env, &governance);
    storage::write_handover_done(env, true);

    log!(env, "administrator handed over", approved, governance);

    Some((previous, governance))
}
