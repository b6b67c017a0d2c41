//! # Soroban Member Registry
//!
//! Identity and membership registry for a permissioned content platform.
//!
//! Wallets register a profile, an administrator approves or bans it, and
//! approved members can bind further wallets to the same profile. Other
//! contracts gate their own operations on [`MemberRegistryContract::is_approved_member`]
//! and [`MemberRegistryContract::admin`].
//!
//! Administrative authority starts with the address passed to `init` and is
//! handed over, once and irrevocably, to the governance authority when the
//! fifth approval is granted.
//!
//! ## Usage
//!
//! ```rust,ignore
//! client.init(&admin);
//! client.set_governance(&governance, &admin);
//!
//! let id = client.register(&profile_cid, &name_cid, &wallet);
//! client.approve(&id, &admin);
//! assert!(client.is_approved_member(&wallet));
//!
//! client.link_wallet(&second_wallet, &wallet);
//! ```

#![no_std]

mod authority;
mod events;
mod profile;
mod storage;
mod validation;

pub use authority::HANDOVER_THRESHOLD;
pub use profile::{MemberStatus, Profile};
pub use storage::RegistryKey;
pub use validation::{validate_cid, MAX_CID_LENGTH};

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String, Vec};

use crate::events::*;

/// Error codes for the member registry contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract or governance authority has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller does not hold the required capability.
    Unauthorized = 3,
    /// Wallet is already bound to a profile.
    AlreadyRegistered = 4,
    /// Profile does not exist or is not pending.
    NotPendingOrAlreadyApproved = 5,
    /// Profile does not exist or is not approved.
    NotApprovedOrAlreadyBanned = 6,
    /// Target profile must be approved.
    ApprovalRequired = 7,
    /// Caller must be an approved member.
    FeatureRequiresApproval = 8,
    /// Profile not found.
    NotFound = 9,
    /// Handover is due but no governance authority has been set.
    GovernanceNotSet = 10,
    /// Content pointer is empty or too long.
    InvalidCid = 11,
}

impl From<RegistryError> for soroban_sdk::Error {
    fn from(e: RegistryError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct MemberRegistryContract;

#[contractimpl]
impl MemberRegistryContract {
    // ========== Initialization ==========

    /// Initialize the contract with the initial administrator.
    ///
    /// This must be called once before any other operations.
    pub fn init(env: Env, admin: Address) {
        if storage::is_initialized(&env) {
            panic_with_error!(&env, RegistryError::AlreadyInitialized);
        }

        admin.require_auth();
        storage::write_admin(&env, &admin);
        storage::write_initial_admin(&env, &admin);
        storage::write_user_count(&env, 0);
        storage::write_approved_count(&env, 0);
        storage::write_handover_done(&env, false);
    }

    /// Record the governance authority that will take over administration.
    ///
    /// Callable once, by the initial administrator. The administrator role
    /// itself only moves when the approval threshold is reached.
    ///
    /// # Panics
    /// - `Unauthorized` if `caller` is not the initial administrator
    /// - `AlreadyInitialized` if governance was already set
    pub fn set_governance(env: Env, governance: Address, caller: Address) {
        authority::set_governance(&env, &governance, &caller);
        emit_governance_set(&env, &governance);
    }

    // ========== Registration ==========

    /// Register a new pending profile for `caller`.
    ///
    /// CIDs are opaque to the registry except for their bounds: each must be
    /// non-empty and at most `MAX_CID_LENGTH` bytes.
    ///
    /// # Returns
    /// The id assigned to the profile. Ids are sequential from 1.
    ///
    /// # Panics
    /// - `InvalidCid` if either CID is empty or too long
    /// - `AlreadyRegistered` if `caller` is bound to any profile
    pub fn register(env: Env, profile_cid: String, name_cid: String, caller: Address) -> u64 {
        caller.require_auth();

        if !storage::is_initialized(&env) {
            panic_with_error!(&env, RegistryError::NotInitialized);
        }

        if !validation::validate_cid(&profile_cid) || !validation::validate_cid(&name_cid) {
            panic_with_error!(&env, RegistryError::InvalidCid);
        }

        if storage::read_profile_id(&env, &caller) != 0 {
            panic_with_error!(&env, RegistryError::AlreadyRegistered);
        }

        let id = storage::read_user_count(&env) + 1;
        let profile = Profile::new(
            &env,
            id,
            profile_cid,
            name_cid,
            caller.clone(),
            env.ledger().sequence(),
        );

        storage::write_profile(&env, &profile);
        storage::write_wallet_binding(&env, &caller, id);
        storage::write_user_count(&env, id);

        emit_registered(&env, &caller, id);

        id
    }

    // ========== Moderation (admin only) ==========

    /// Approve a pending profile.
    ///
    /// The approval that brings the cumulative approval count to
    /// `HANDOVER_THRESHOLD` also moves the administrator role to the
    /// governance authority, in the same invocation.
    ///
    /// # Panics
    /// - `Unauthorized` if `caller` is not the administrator
    /// - `NotPendingOrAlreadyApproved` if the profile is missing or not pending
    /// - `GovernanceNotSet` if this approval is due to hand over but no
    ///   governance authority was set
    pub fn approve(env: Env, id: u64, caller: Address) {
        authority::require_admin(&env, &caller);

        let mut profile = match storage::read_profile(&env, id) {
            Some(p) if p.is_pending() => p,
            _ => panic_with_error!(&env, RegistryError::NotPendingOrAlreadyApproved),
        };

        authority::check_handover_ready(&env);

        profile.status = MemberStatus::Approved;
        profile.updated_at = env.ledger().sequence();
        storage::write_profile(&env, &profile);

        let handover = authority::record_approval(&env);

        emit_approved(&env, id);
        if let Some((previous, governance)) = handover {
            emit_admin_transferred(&env, &previous, &governance);
        }
    }

    /// Ban an approved profile.
    ///
    /// The profile drops back to `Unapproved`. Its wallets stay bound to it,
    /// so none of them can register again, and the approval count is kept.
    ///
    /// # Panics
    /// - `Unauthorized` if `caller` is not the administrator
    /// - `NotApprovedOrAlreadyBanned` if the profile is missing or not approved
    pub fn ban(env: Env, id: u64, caller: Address) {
        authority::require_admin(&env, &caller);

        let mut profile = match storage::read_profile(&env, id) {
            Some(p) if p.is_approved() => p,
            _ => panic_with_error!(&env, RegistryError::NotApprovedOrAlreadyBanned),
        };

        profile.status = MemberStatus::Unapproved;
        profile.updated_at = env.ledger().sequence();
        storage::write_profile(&env, &profile);

        emit_banned(&env, id);
    }

    /// Attach `new_wallet` to an approved profile on the member's behalf.
    ///
    /// Recovery is additive: wallets already on the profile, including a lost
    /// one, stay bound.
    ///
    /// # Panics
    /// - `Unauthorized` if `caller` is not the administrator
    /// - `ApprovalRequired` if the profile is missing or not approved
    /// - `AlreadyRegistered` if `new_wallet` is bound to any profile
    pub fn admin_recover_wallet(env: Env, id: u64, new_wallet: Address, caller: Address) {
        authority::require_admin(&env, &caller);

        let profile = match storage::read_profile(&env, id) {
            Some(p) if p.is_approved() => p,
            _ => panic_with_error!(&env, RegistryError::ApprovalRequired),
        };

        Self::bind_wallet(&env, profile, &new_wallet);
        log!(&env, "wallet recovered", id, new_wallet);

        emit_profile_recovered(&env, &new_wallet, id);
    }

    // ========== Member Functions ==========

    /// Bind `new_wallet` to the caller's approved profile.
    ///
    /// # Panics
    /// - `FeatureRequiresApproval` if `caller` is not an approved member
    /// - `AlreadyRegistered` if `new_wallet` is bound to any profile,
    ///   including the caller's own
    pub fn link_wallet(env: Env, new_wallet: Address, caller: Address) {
        caller.require_auth();

        let profile = Self::require_member(&env, &caller);
        let id = profile.id;

        Self::bind_wallet(&env, profile, &new_wallet);

        emit_wallet_linked(&env, &new_wallet, id);
    }

    /// Replace the profile CID of the caller's approved profile.
    ///
    /// # Panics
    /// - `FeatureRequiresApproval` if `caller` is not an approved member
    /// - `InvalidCid` if the CID is empty or too long
    pub fn edit_profile(env: Env, new_profile_cid: String, caller: Address) {
        caller.require_auth();

        let mut profile = Self::require_member(&env, &caller);

        if !validation::validate_cid(&new_profile_cid) {
            panic_with_error!(&env, RegistryError::InvalidCid);
        }

        profile.profile_cid = new_profile_cid.clone();
        profile.updated_at = env.ledger().sequence();
        storage::write_profile(&env, &profile);

        emit_edited(&env, &caller, profile.id, &new_profile_cid);
    }

    // ========== Queries ==========

    /// Get a profile by id.
    ///
    /// # Panics
    /// - `NotFound` if no profile has this id
    pub fn profile(env: Env, id: u64) -> Profile {
        storage::read_profile(&env, id)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotFound))
    }

    /// Get a profile by id, if it exists.
    pub fn get_profile(env: Env, id: u64) -> Option<Profile> {
        storage::read_profile(&env, id)
    }

    /// Get the wallets bound to a profile, in linking order.
    pub fn wallets(env: Env, id: u64) -> Vec<Address> {
        Self::profile(env, id).wallets
    }

    /// Profile id bound to `wallet`, or 0 if the wallet is unbound.
    pub fn profile_id(env: Env, wallet: Address) -> u64 {
        storage::read_profile_id(&env, &wallet)
    }

    /// Whether `wallet` belongs to a currently approved profile.
    pub fn is_approved_member(env: Env, wallet: Address) -> bool {
        match storage::read_profile_id(&env, &wallet) {
            0 => false,
            id => storage::read_profile(&env, id).map_or(false, |p| p.is_approved()),
        }
    }

    /// Number of profiles ever registered.
    pub fn user_count(env: Env) -> u64 {
        storage::read_user_count(&env)
    }

    /// Number of approvals ever granted.
    pub fn approved_count(env: Env) -> u64 {
        storage::read_approved_count(&env)
    }

    /// Address currently holding administrative capability.
    pub fn admin(env: Env) -> Address {
        authority::admin(&env)
    }

    /// Governance authority, once set.
    pub fn governance(env: Env) -> Option<Address> {
        storage::read_governance(&env)
    }

    /// Whether the administrator role has moved to governance.
    pub fn handover_done(env: Env) -> bool {
        storage::read_handover_done(&env)
    }

    // ========== Internal Helpers ==========

    /// Load the approved profile bound to `caller`.
    fn require_member(env: &Env, caller: &Address) -> Profile {
        let id = storage::read_profile_id(env, caller);

        match storage::read_profile(env, id) {
            Some(p) if id != 0 && p.is_approved() => p,
            _ => panic_with_error!(env, RegistryError::FeatureRequiresApproval),
        }
    }

    /// Append `wallet` to `profile` and record the reverse binding.
    fn bind_wallet(env: &Env, mut profile: Profile, wallet: &Address) {
        if storage::read_profile_id(env, wallet) != 0 {
            panic_with_error!(env, RegistryError::AlreadyRegistered);
        }

        profile.wallets.push_back(wallet.clone());
        profile.updated_at = env.ledger().sequence();
        storage::write_profile(env, &profile);
        storage::write_wallet_binding(env, wallet, profile.id);
    }
}
