use anchor_lang::prelude::*;
use crate::constants::MAX_TOP_STALLS;
use crate::errors::CarnivalError;
use crate::state::{Carnival, RevenueIndex};

/// Positionally aligned ranking result.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TopStalls {
    pub ids: Vec<u64>,
    pub revenues: Vec<u64>,
}

/// (stall id, net revenue)
pub type StallRevenue = (u64, u64);

fn outranks(candidate: StallRevenue, current: StallRevenue) -> bool {
    candidate.1 > current.1 || (candidate.1 == current.1 && candidate.0 < current.0)
}

/// Top `min(k, entries.len())` stalls by descending revenue, ties to the lower id.
///
/// Same output as a stable descending sort truncated to `k`, but only the
/// current leaders are kept, so the cost is bounded by `k` rather than by
/// the number of stalls.
pub fn top_stalls(entries: &[StallRevenue], k: u64) -> TopStalls {
    let take = k.min(entries.len() as u64) as usize;
    let mut leaders: Vec<StallRevenue> = Vec::with_capacity(take + 1);

    for &entry in entries {
        // Leaders stay sorted, so everything ahead of `pos` outranks `entry`
        let pos = leaders.partition_point(|&held| outranks(held, entry));
        if pos < take {
            leaders.insert(pos, entry);
            leaders.truncate(take);
        }
    }

    let (ids, revenues) = leaders.into_iter().unzip();
    TopStalls { ids, revenues }
}

/// Ranks every registered stall from the revenue index.
pub fn rank_index(carnival: &Carnival, index: &RevenueIndex, k: u64) -> Result<TopStalls> {
    require!(
        index.len() == carnival.stall_count,
        CarnivalError::RevenueIndexMismatch
    );
    require!(
        k.min(index.len()) <= MAX_TOP_STALLS,
        CarnivalError::RankingTooLarge
    );

    Ok(top_stalls(&index.entries(), k))
}
