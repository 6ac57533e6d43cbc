use anchor_lang::prelude::*;
use anchor_lang::AccountSerialize;
use crate::constants::*;
use crate::errors::CarnivalError;
use crate::state::*;
use crate::utils::access::{is_administrator, is_stall_owner};
use crate::utils::ranking::{rank_index, top_stalls, TopStalls};
use crate::utils::{release_lamports, string_to_bytes};

const SOL: u64 = 1_000_000_000;
const STALL_RENT: u64 = 1_690_560;

pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: CarnivalError) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => {
            assert_eq!(err.error_code_number, u32::from(expected), "{}", err.error_name)
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

pub(crate) fn new_carnival(admin: Pubkey, max_stalls: u64) -> Carnival {
    Carnival {
        admin,
        max_stalls,
        stall_count: 0,
        bump: 255,
    }
}

pub(crate) fn new_stall(id: u64, owner: Pubkey, duration_units: u8) -> Stall {
    Stall {
        carnival: Pubkey::new_unique(),
        id,
        name: string_to_bytes("Food Stall", MAX_STALL_NAME).unwrap().try_into().unwrap(),
        owner,
        duration_units,
        total_collected: 0,
        withdrawn: false,
        bump: 254,
    }
}

pub(crate) fn new_record(payer: Pubkey) -> PaymentRecord {
    PaymentRecord {
        stall: Pubkey::new_unique(),
        payer,
        amount: 0,
        bump: 253,
    }
}

/// Owned backing storage for an `AccountInfo`.
struct AccountFixture {
    key: Pubkey,
    lamports: u64,
    data: Vec<u8>,
    owner: Pubkey,
}

impl AccountFixture {
    fn stall(stall: &Stall) -> Self {
        let mut data = Vec::with_capacity(8 + Stall::SIZE);
        stall.try_serialize(&mut data).unwrap();
        Self {
            key: Pubkey::new_unique(),
            lamports: STALL_RENT + stall.total_collected,
            data,
            owner: crate::ID,
        }
    }

    fn wallet(lamports: u64) -> Self {
        Self {
            key: Pubkey::new_unique(),
            lamports,
            data: vec![],
            owner: anchor_lang::system_program::ID,
        }
    }

    fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            false,
            true,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            0,
        )
    }
}

/// Registry plus its revenue index after registering one stall per revenue.
fn indexed_carnival(revenues: &[u64]) -> (Carnival, RevenueIndex) {
    let mut carnival = new_carnival(Pubkey::new_unique(), MAX_INDEXED_STALLS);
    let mut index = new_revenue_index();
    for revenue in revenues {
        let id = carnival.register_stall(1).unwrap();
        index.track_stall(id).unwrap();
        index.set_revenue(id, *revenue).unwrap();
    }
    (carnival, index)
}

fn new_revenue_index() -> RevenueIndex {
    RevenueIndex {
        carnival: Pubkey::new_unique(),
        bump: 252,
        revenues: Vec::new(),
    }
}

#[test]
fn test_access_predicates() {
    let admin = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();
    let carnival = new_carnival(admin, u64::MAX);
    let stall = new_stall(1, owner, 2);

    assert!(is_administrator(&carnival, &admin));
    assert!(!is_administrator(&carnival, &owner));

    assert!(is_stall_owner(Some(&stall), &owner));
    assert!(!is_stall_owner(Some(&stall), &stranger));
    assert!(!is_stall_owner(Some(&stall), &admin));
    assert!(!is_stall_owner(None, &owner));
}

#[test]
fn test_every_valid_duration_registers() {
    let mut carnival = new_carnival(Pubkey::new_unique(), u64::MAX);

    for units in MIN_DURATION_UNITS..=MAX_DURATION_UNITS {
        let before = carnival.stall_count;
        carnival.register_stall(units).unwrap();
        assert_eq!(carnival.stall_count, before + 1);
    }
    assert_error(carnival.register_stall(MAX_DURATION_UNITS + 1), CarnivalError::InvalidDuration);
    assert_eq!(carnival.stall_count, 3);
}

#[test]
fn test_payment_records_sum_to_stall_total() {
    let mut stall = new_stall(1, Pubkey::new_unique(), 2);
    let payers: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
    let mut records: Vec<PaymentRecord> = payers.iter().map(|p| new_record(*p)).collect();

    // Deterministic pseudo-random mix of payments and refunds
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        let who = (seed >> 33) as usize % records.len();
        let amount = (seed >> 40) % 1_000;
        let before = (records[who].amount, stall.total_collected);

        let result = if seed & 1 == 0 {
            apply_payment(&mut stall, &mut records[who], amount)
        } else {
            apply_refund(&mut stall, Some(&mut records[who]), amount)
        };
        if result.is_err() {
            assert_eq!((records[who].amount, stall.total_collected), before);
        }

        let sum: u64 = records.iter().map(|r| r.amount).sum();
        assert_eq!(sum, stall.total_collected);
    }
}

#[test]
fn test_withdraw_after_duration_scenario() {
    let owner = Pubkey::new_unique();
    let mut carnival = new_carnival(Pubkey::new_unique(), u64::MAX);
    let id = carnival.register_stall(1).unwrap();
    let mut stall = new_stall(id, owner, 1);
    let mut record = new_record(Pubkey::new_unique());

    apply_payment(&mut stall, &mut record, SOL).unwrap();
    assert!(is_stall_owner(Some(&stall), &owner));

    let mut stall_account = AccountFixture::stall(&stall);
    let mut owner_wallet = AccountFixture::wallet(5 * SOL);
    let stall_info = stall_account.info();
    let owner_info = owner_wallet.info();

    // Duration elapsed, so the owner collects everything
    let amount = stall.settle(3).unwrap();
    release_lamports(&stall_info, &owner_info, amount).unwrap();

    assert!(stall.withdrawn);
    assert_eq!(stall.total_collected, 0);
    assert_eq!(stall_info.lamports(), STALL_RENT);
    assert_eq!(owner_info.lamports(), 6 * SOL);

    // Second withdrawal is rejected
    assert_error(stall.settle(3), CarnivalError::AlreadyWithdrawn);
}

#[test]
fn test_ranking_after_refund_scenario() {
    let mut carnival = new_carnival(Pubkey::new_unique(), u64::MAX);
    let mut stalls: Vec<Stall> = (0..3)
        .map(|_| {
            let id = carnival.register_stall(1).unwrap();
            new_stall(id, Pubkey::new_unique(), 1)
        })
        .collect();
    let user = Pubkey::new_unique();
    let mut records: Vec<PaymentRecord> = stalls.iter().map(|_| new_record(user)).collect();

    apply_payment(&mut stalls[0], &mut records[0], SOL).unwrap();
    apply_payment(&mut stalls[1], &mut records[1], SOL).unwrap();
    apply_refund(&mut stalls[1], Some(&mut records[1]), SOL / 5).unwrap();
    apply_payment(&mut stalls[2], &mut records[2], SOL / 2).unwrap();

    let entries: Vec<(u64, u64)> = stalls.iter().map(|s| (s.id, s.total_collected)).collect();
    let top = top_stalls(&entries, 3);

    assert_eq!(top.ids, vec![1, 2, 3]);
    assert_eq!(top.revenues, vec![SOL, 800_000_000, 500_000_000]);
}

#[test]
fn test_max_stalls_scenario() {
    let admin = Pubkey::new_unique();
    let mut carnival = new_carnival(admin, DEFAULT_MAX_STALLS);
    carnival.register_stall(1).unwrap();
    carnival.register_stall(2).unwrap();

    assert!(is_administrator(&carnival, &admin));
    assert_error(carnival.set_max_stalls(1), CarnivalError::CapBelowCurrentCount);

    // Raising the cap reopens registration
    carnival.set_max_stalls(5).unwrap();
    for expected_id in 3..=5 {
        assert_eq!(carnival.register_stall(3).unwrap(), expected_id);
    }
    assert_error(carnival.register_stall(3), CarnivalError::CapacityExceeded);
    assert_eq!(carnival.stall_count, 5);
}

#[test]
fn test_refund_moves_lamports_back() {
    let mut stall = new_stall(1, Pubkey::new_unique(), 1);
    let payer = Pubkey::new_unique();
    let mut record = new_record(payer);
    apply_payment(&mut stall, &mut record, 2 * SOL).unwrap();

    let mut stall_account = AccountFixture::stall(&stall);
    let mut payer_wallet = AccountFixture::wallet(0);
    let stall_info = stall_account.info();
    let payer_info = payer_wallet.info();

    // Ledger first, then lamports leave the stall
    apply_refund(&mut stall, Some(&mut record), SOL / 2).unwrap();
    release_lamports(&stall_info, &payer_info, SOL / 2).unwrap();

    assert_eq!(payer_info.lamports(), SOL / 2);
    assert_eq!(stall_info.lamports() - STALL_RENT, stall.total_collected);
}

#[test]
fn test_top_stalls_length_is_min_of_k_and_count() {
    let entries: Vec<(u64, u64)> = (1..=6u64).map(|id| (id, 100 - id)).collect();

    for k in 0..10u64 {
        let top = top_stalls(&entries, k);
        let expected = k.min(entries.len() as u64) as usize;
        assert_eq!(top.ids.len(), expected);
        assert_eq!(top.revenues.len(), expected);
        assert!(top.revenues.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn test_rank_more_stalls_than_one_page() {
    // 60 stalls, revenue rising with id, so the newest lead
    let revenues: Vec<u64> = (1..=60u64).map(|id| id * 1_000).collect();
    let (carnival, index) = indexed_carnival(&revenues);
    assert_eq!(carnival.stall_count, 60);

    let top = rank_index(&carnival, &index, 1).unwrap();
    assert_eq!(top.ids, vec![60]);
    assert_eq!(top.revenues, vec![60_000]);

    let top = rank_index(&carnival, &index, MAX_TOP_STALLS).unwrap();
    assert_eq!(top.ids.len(), MAX_TOP_STALLS as usize);
    assert_eq!(top.ids[0], 60);
    assert_eq!(*top.ids.last().unwrap(), 60 - MAX_TOP_STALLS + 1);

    // Output size is what is bounded, not the stall count
    assert_error(
        rank_index(&carnival, &index, MAX_TOP_STALLS + 1),
        CarnivalError::RankingTooLarge,
    );
}

#[test]
fn test_rank_full_index() {
    // Every stall ties at zero except one near the end
    let mut revenues = vec![0u64; MAX_INDEXED_STALLS as usize];
    revenues[1_000] = SOL;
    let (carnival, index) = indexed_carnival(&revenues);

    let top = rank_index(&carnival, &index, 3).unwrap();
    assert_eq!(top.ids, vec![1_001, 1, 2]);
    assert_eq!(top.revenues, vec![SOL, 0, 0]);
}

#[test]
fn test_rank_large_k_small_registry() {
    let (carnival, index) = indexed_carnival(&[5, 7]);

    // k beyond the page limit is fine while the registry is small
    let top = rank_index(&carnival, &index, u64::MAX).unwrap();
    assert_eq!(top.ids, vec![2, 1]);

    let (carnival, index) = indexed_carnival(&[]);
    assert_eq!(rank_index(&carnival, &index, 10).unwrap(), TopStalls::default());
}

#[test]
fn test_rank_rejects_stale_index() {
    let (mut carnival, index) = indexed_carnival(&[1, 2, 3]);
    carnival.register_stall(1).unwrap();

    assert_error(rank_index(&carnival, &index, 2), CarnivalError::RevenueIndexMismatch);
}

#[test]
fn test_index_tracks_ids_in_order() {
    let mut index = new_revenue_index();
    assert!(index.is_empty());

    index.track_stall(1).unwrap();
    assert_error(index.track_stall(3), CarnivalError::RevenueIndexMismatch);
    assert_error(index.track_stall(1), CarnivalError::RevenueIndexMismatch);
    index.track_stall(2).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.revenue(2), Some(0));
    assert_eq!(index.revenue(0), None);
    assert_error(index.set_revenue(3, 1), CarnivalError::RevenueIndexMismatch);
    assert_error(index.set_revenue(0, 1), CarnivalError::RevenueIndexMismatch);
}

#[test]
fn test_index_mirrors_stall_totals() {
    let owner = Pubkey::new_unique();
    let payer = Pubkey::new_unique();
    let mut carnival = new_carnival(Pubkey::new_unique(), MAX_INDEXED_STALLS);
    let mut index = new_revenue_index();

    let id = carnival.register_stall(1).unwrap();
    index.track_stall(id).unwrap();
    let mut stall = new_stall(id, owner, 1);
    let mut record = new_record(payer);

    // Each handler writes the stall total back after the ledger update
    pay_into_stall(Some(&mut stall), &mut record, 3 * SOL).unwrap();
    index.set_revenue(id, stall.total_collected).unwrap();
    assert_eq!(index.revenue(id), Some(3 * SOL));

    refund_from_stall(Some(&mut stall), &owner, Some(&mut record), SOL).unwrap();
    index.set_revenue(id, stall.total_collected).unwrap();
    assert_eq!(index.revenue(id), Some(2 * SOL));

    let amount = withdraw_from_stall(Some(&mut stall), &owner, 1).unwrap();
    index.set_revenue(id, stall.total_collected).unwrap();
    assert_eq!(amount, 2 * SOL);
    assert_eq!(index.revenue(id), Some(0));
}

#[test]
fn test_index_space_grows_per_stall() {
    assert_eq!(RevenueIndex::space_for(0), 8 + 32 + 1 + 4);
    assert_eq!(RevenueIndex::space_for(3) - RevenueIndex::space_for(2), 8);

    // Serialized size matches the realloc target
    let (_, index) = indexed_carnival(&[1, 2, 3]);
    let mut data = Vec::new();
    index.try_serialize(&mut data).unwrap();
    assert_eq!(data.len(), RevenueIndex::space_for(3));
}

#[test]
fn test_cap_limited_by_index_size() {
    let mut carnival = new_carnival(Pubkey::new_unique(), DEFAULT_MAX_STALLS);

    assert_error(
        carnival.set_max_stalls(MAX_INDEXED_STALLS + 1),
        CarnivalError::CapAboveIndexLimit,
    );
    assert_eq!(carnival.max_stalls, DEFAULT_MAX_STALLS);
    carnival.set_max_stalls(MAX_INDEXED_STALLS).unwrap();
}
