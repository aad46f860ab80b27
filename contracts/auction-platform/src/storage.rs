use soroban_sdk::{Env, String, Vec};

use crate::types::{Auction, Bid, PlatformConfig, StorageKey};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Config ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(env: &Env) -> Option<PlatformConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &PlatformConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
    extend_instance_ttl(env);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Auction Counter ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::AuctionCounter)
        .unwrap_or(0)
}

pub fn next_auction_id(env: &Env) -> u64 {
    get_auction_counter(env) + 1
}

// ========== Auctions ==========

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        extend_persistent_ttl(env, &key);
    }
    auction
}

pub fn get_bid_history(env: &Env, auction: &Auction) -> Vec<Bid> {
    let mut history = Vec::new(env);
    for n in 0..auction.bid_count {
        let key = StorageKey::Bid(auction.id, n);
        if let Some(bid) = env.storage().persistent().get::<_, Bid>(&key) {
            extend_persistent_ttl(env, &key);
            history.push_back(bid);
        }
    }
    history
}

// The three writers below are the only code that mutates auction state.
// Each one updates the primary record and every index it affects together.

/// Store a freshly created auction, advance the counter and index it under
/// its creator.
pub fn record_created(env: &Env, auction: &Auction) {
    env.storage()
        .instance()
        .set(&StorageKey::AuctionCounter, &auction.id);
    save_auction(env, auction);
    push_index(
        env,
        StorageKey::AuctionsByCreator(auction.creator_address.clone()),
        auction.id,
    );
}

/// Store an auction whose highest bid was just replaced by `bid`, append
/// the bid to its history and index the bidder once per auction.
///
/// `auction.bid_count` must already include `bid`; the bid is written at
/// position `bid_count - 1`.
pub fn record_bid(env: &Env, auction: &Auction, bid: &Bid) {
    save_auction(env, auction);

    let bid_key = StorageKey::Bid(auction.id, auction.bid_count - 1);
    env.storage().persistent().set(&bid_key, bid);
    extend_persistent_ttl(env, &bid_key);

    let bidder_key = StorageKey::AuctionsByBidder(bid.bidder.clone());
    if !index_contains(&get_index(env, &bidder_key), auction.id) {
        push_index(env, bidder_key, auction.id);
    }
}

/// Store a finalized auction and index it under its winner, if any.
pub fn record_completed(env: &Env, auction: &Auction) {
    save_auction(env, auction);
    if let Some(winner) = &auction.highest_bidder {
        push_index(env, StorageKey::AuctionsByWinner(winner.clone()), auction.id);
    }
}

fn save_auction(env: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    extend_persistent_ttl(env, &key);
}

// ========== Address Indexes ==========

pub fn get_auctions_by_creator(env: &Env, creator: &String) -> Vec<u64> {
    get_index(env, &StorageKey::AuctionsByCreator(creator.clone()))
}

pub fn get_auctions_by_bidder(env: &Env, bidder: &String) -> Vec<u64> {
    get_index(env, &StorageKey::AuctionsByBidder(bidder.clone()))
}

pub fn get_auctions_by_winner(env: &Env, winner: &String) -> Vec<u64> {
    get_index(env, &StorageKey::AuctionsByWinner(winner.clone()))
}

fn get_index(env: &Env, key: &StorageKey) -> Vec<u64> {
    let ids = env
        .storage()
        .persistent()
        .get::<_, Vec<u64>>(key)
        .unwrap_or(Vec::new(env));
    if !ids.is_empty() {
        extend_persistent_ttl(env, key);
    }
    ids
}

fn push_index(env: &Env, key: StorageKey, auction_id: u64) {
    let mut ids = get_index(env, &key);
    ids.push_back(auction_id);
    env.storage().persistent().set(&key, &ids);
    extend_persistent_ttl(env, &key);
}

fn index_contains(ids: &Vec<u64>, auction_id: u64) -> bool {
    for id in ids.iter() {
        if id == auction_id {
            return true;
        }
    }
    false
}

fn extend_persistent_ttl(env: &Env, key: &StorageKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
