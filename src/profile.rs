//! Profile struct and membership status.

use soroban_sdk::{contracttype, Address, Env, String, Vec};

/// Membership status of a profile.
///
/// `Unapproved` is also the state a profile returns to when banned. A profile
/// that was never registered has no status at all; it simply does not exist.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MemberStatus {
    Unapproved = 0,
    Pending = 1,
    Approved = 2,
}

/// Identity record created by registration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Sequential id, starting at 1.
    pub id: u64,

    /// Current membership status.
    pub status: MemberStatus,

    /// Content pointer to the profile document. Editable once approved.
    pub profile_cid: String,

    /// Content pointer to the name document. Fixed at registration.
    pub name_cid: String,

    /// Wallets bound to this profile, in linking order. The first entry is
    /// the registering wallet. Append-only.
    pub wallets: Vec<Address>,

    /// Ledger sequence when the profile was registered.
    pub registered_at: u32,

    /// Ledger sequence of the last change to this record.
    pub updated_at: u32,
}

impl Profile {
    /// Create a pending profile owned by `wallet`.
    pub fn new(
        env: &Env,
        id: u64,
        profile_cid: String,
        name_cid: String,
        wallet: Address,
        registered_at: u32,
    ) -> Self {
        let mut wallets = Vec::new(env);
        wallets.push_back(wallet);

        Self {
            id,
            status: MemberStatus::Pending,
            profile_cid,
            name_cid,
            wallets,
            registered_at,
            updated_at: registered_at,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == MemberStatus::Approved
    }

    pub fn is_pending(&self) -> bool {
        self.status == MemberStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_new_profile_is_pending_with_single_wallet() {
        let env = Env::default();
        let wallet = Address::generate(&env);
        let cid = String::from_str(&env, "Qmfoo");

        let profile = Profile::new(&env, 1, cid.clone(), cid.clone(), wallet.clone(), 7);

        assert_eq!(profile.id, 1);
        assert!(profile.is_pending());
        assert!(!profile.is_approved());
        assert_eq!(profile.wallets.len(), 1);
        assert_eq!(profile.wallets.get(0).unwrap(), wallet);
        assert_eq!(profile.registered_at, 7);
        assert_eq!(profile.updated_at, 7);
    }

    #[test]
    fn test_status_discriminants_are_stable() {
        assert_eq!(MemberStatus::Unapproved as u32, 0);
        assert_eq!(MemberStatus::Pending as u32, 1);
        assert_eq!(MemberStatus::Approved as u32, 2);
    }
}
