//! Events published by the auction platform.
//!
//! Every event has the event name as its first topic. Auction lifecycle
//! events carry the auction id as the second topic and publish their fields
//! as a positional tuple, so indexers read them in declaration order.

use soroban_sdk::{Address, Env, String, Symbol};

pub const AUCTION_CREATED: &str = "AuctionCreated";
pub const BID_PLACED: &str = "BidPlaced";
pub const AUCTION_COMPLETED: &str = "AuctionCompleted";
pub const PLATFORM_INITIALIZED: &str = "PlatformInitialized";
pub const PLATFORM_PAUSED: &str = "PlatformPaused";
pub const ADMIN_CHANGED: &str = "AdminChanged";

/// Data: `(auction_id, creator_address, item_name, starting_bid, created_timestamp)`
pub fn emit_auction_created(
    env: &Env,
    auction_id: u64,
    creator_address: String,
    item_name: String,
    starting_bid: i128,
    created_timestamp: u64,
) {
    env.events().publish(
        (Symbol::new(env, AUCTION_CREATED), auction_id),
        (auction_id, creator_address, item_name, starting_bid, created_timestamp),
    );
}

/// Data: `(auction_id, bidder_address, bid_amount, timestamp)`
pub fn emit_bid_placed(
    env: &Env,
    auction_id: u64,
    bidder_address: String,
    bid_amount: i128,
    timestamp: u64,
) {
    env.events().publish(
        (Symbol::new(env, BID_PLACED), auction_id),
        (auction_id, bidder_address, bid_amount, timestamp),
    );
}

/// Data: `(auction_id, highest_bidder, current_highest_bid)`. The winner is
/// `None` and the amount 0 when the auction closed without bids.
pub fn emit_auction_completed(
    env: &Env,
    auction_id: u64,
    highest_bidder: Option<String>,
    current_highest_bid: i128,
) {
    env.events().publish(
        (Symbol::new(env, AUCTION_COMPLETED), auction_id),
        (auction_id, highest_bidder, current_highest_bid),
    );
}

pub fn emit_platform_initialized(env: &Env, admin: Address) {
    env.events()
        .publish((Symbol::new(env, PLATFORM_INITIALIZED), admin.clone()), admin);
}

pub fn emit_platform_paused(env: &Env, admin: Address, is_paused: bool) {
    env.events()
        .publish((Symbol::new(env, PLATFORM_PAUSED), admin), is_paused);
}

pub fn emit_admin_changed(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (Symbol::new(env, ADMIN_CHANGED), old_admin.clone()),
        (old_admin, new_admin),
    );
}
