//! Account normalization and uniqueness properties.

use std::collections::HashSet;

use genesis_core::{normalize, Account, AccountError, GenesisAccount, GenesisError, GenesisValidator};
use proptest::prelude::*;
use shared_types::{Coin, Coins};

use crate::fixtures::{address, plain_account};

/// Strategy for a non-zero vesting balance.
fn vesting_balance() -> impl Strategy<Value = Coins> {
    (1u64..1_000_000_000u64).prop_map(|amount| Coins::from(Coin::new("cyb", amount)))
}

/// Unix seconds, never zero.
fn timestamp() -> impl Strategy<Value = i64> {
    1i64..4_000_000_000i64
}

fn vesting_account(balance: Coins, start: i64, end: i64) -> GenesisAccount {
    GenesisAccount {
        original_vesting: balance,
        start_time: start,
        end_time: end,
        ..plain_account(1, 1_000)
    }
}

/// Strategy for a small list of account indices, possibly repeating.
fn account_ids() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..64, 0..32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Vesting with both start and end set is continuous, keyed by start.
    #[test]
    fn prop_continuous_vesting(balance in vesting_balance(), start in timestamp(), end in timestamp()) {
        match normalize(&vesting_account(balance, start, end)) {
            Ok(Account::ContinuousVesting(acc)) => {
                prop_assert_eq!(acc.start_time, start);
                prop_assert_eq!(acc.base_vesting.end_time, end);
            }
            other => prop_assert!(false, "expected continuous vesting, got {:?}", other),
        }
    }

    /// Vesting with only an end time is delayed.
    #[test]
    fn prop_delayed_vesting(balance in vesting_balance(), end in timestamp()) {
        let result = normalize(&vesting_account(balance, 0, end));
        prop_assert!(matches!(result, Ok(Account::DelayedVesting(_))), "got {:?}", result);
    }

    /// Vesting without an end time is fatal whatever the start time.
    #[test]
    fn prop_vesting_without_end_is_fatal(balance in vesting_balance(), start in prop_oneof![Just(0i64), timestamp()]) {
        let result = normalize(&vesting_account(balance, start, 0));
        prop_assert!(matches!(result, Err(AccountError::InvalidVesting { .. })), "got {:?}", result);
    }

    /// Without vesting, a module name yields a module account with exactly
    /// the declared permissions.
    #[test]
    fn prop_module_account_permissions(
        name in "[a-z_]{1,20}",
        permissions in prop::collection::vec("[a-z]{3,10}", 0..4),
    ) {
        let descriptor = GenesisAccount {
            module_name: name.clone(),
            module_permissions: permissions.clone(),
            ..plain_account(2, 0)
        };
        match normalize(&descriptor) {
            Ok(Account::Module(acc)) => {
                prop_assert_eq!(acc.name, name);
                prop_assert_eq!(acc.permissions, permissions);
            }
            other => prop_assert!(false, "expected module account, got {:?}", other),
        }
    }

    /// Without vesting or module name, the account is plain.
    #[test]
    fn prop_plain_account(n in 0u32..10_000, amount in 0u64..u64::MAX) {
        let result = normalize(&plain_account(n, amount));
        prop_assert!(matches!(&result, Ok(Account::Base(_))), "got {:?}", result);
        if let Ok(account) = result {
            prop_assert_eq!(account.address(), address(n));
        }
    }

    /// The account list passes the duplicate check exactly when its
    /// addresses are pairwise distinct; the first repeat is reported.
    #[test]
    fn prop_duplicate_addresses(ids in account_ids()) {
        let mut state = genesis_core::build_default();
        state.accounts = ids.iter().map(|&n| plain_account(n, 1)).collect();

        let mut seen = HashSet::new();
        let first_repeat = ids.iter().copied().find(|n| !seen.insert(*n));

        let result = GenesisValidator::default().validate_accounts(&state);
        match first_repeat {
            Some(n) => prop_assert!(
                matches!(result, Err(GenesisError::DuplicateAccount(addr)) if addr == address(n)),
                "expected duplicate {}, got {:?}", n, result
            ),
            None => prop_assert!(result.is_ok(), "unexpected error {:?}", result),
        }
    }
}
