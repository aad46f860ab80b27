#![no_std]

mod admin;
mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use errors::Error;
pub use types::{Auction, Bid, PlatformConfig};

/// Largest page `get_active_auctions` returns
const MAX_PAGE_SIZE: u32 = 100;

/// NFT auction platform.
///
/// Keeps an append-only ledger of English auctions. Each auction moves
/// through create → bid (0..N) → finalize, and is indexed by the addresses
/// that created, bid on and won it. Creator and bidder addresses are opaque
/// strings supplied by the frontend bridge; only the platform admin is a
/// native Soroban `Address`.
#[contract]
pub struct AuctionPlatform;

#[contractimpl]
impl AuctionPlatform {
    // ========== INITIALIZATION ==========

    /// Initialize the platform with its admin.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the platform has already been initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let config = PlatformConfig {
            admin: admin.clone(),
            is_paused: false,
            updated_at: env.ledger().timestamp(),
        };
        storage::set_config(&env, &config);

        events::emit_platform_initialized(&env, admin);
        Ok(())
    }

    // ========== AUCTION LIFECYCLE ==========

    /// Open a new auction and return its id.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - Empty item name, non-positive starting bid,
    ///   or a duration that overflows the end timestamp
    /// * `Error::PlatformPaused` - If the platform is paused
    pub fn create_auction(
        env: Env,
        item_name: String,
        item_image_url: String,
        starting_bid: i128,
        duration_seconds: u64,
        creator_address: String,
    ) -> Result<u64, Error> {
        admin::require_open(&env)?;

        if item_name.len() == 0 {
            return Err(Error::InvalidInput);
        }
        if starting_bid <= 0 {
            return Err(Error::InvalidInput);
        }

        let now = env.ledger().timestamp();
        let end_timestamp = now
            .checked_add(duration_seconds)
            .ok_or(Error::InvalidInput)?;
        let auction_id = storage::next_auction_id(&env);

        let auction = Auction {
            id: auction_id,
            item_name: item_name.clone(),
            item_image_url,
            creator_address: creator_address.clone(),
            starting_bid,
            current_highest_bid: 0,
            highest_bidder: None,
            created_timestamp: now,
            end_timestamp,
            is_active: true,
            is_completed: false,
            bid_count: 0,
        };
        storage::record_created(&env, &auction);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction created", auction_id, end_timestamp);
        events::emit_auction_created(
            &env,
            auction_id,
            creator_address,
            item_name,
            starting_bid,
            now,
        );

        Ok(auction_id)
    }

    /// Bid on an open auction.
    ///
    /// The bid must strictly exceed the current highest bid, which is 0
    /// until the first bid is accepted.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction id
    /// * `Error::AuctionEnded` - Auction expired or already finalized
    /// * `Error::SelfBid` - Bidder is the auction's creator
    /// * `Error::BidTooLow` - Bid does not beat the current highest bid
    /// * `Error::PlatformPaused` - If the platform is paused
    pub fn place_bid(
        env: Env,
        auction_id: u64,
        bid_amount: i128,
        bidder_address: String,
    ) -> Result<(), Error> {
        admin::require_open(&env)?;

        let now = env.ledger().timestamp();
        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::NotFound)?;

        if !auction.is_open(now) {
            return Err(Error::AuctionEnded);
        }
        if bidder_address == auction.creator_address {
            return Err(Error::SelfBid);
        }
        if bid_amount <= auction.current_highest_bid {
            return Err(Error::BidTooLow);
        }

        auction.current_highest_bid = bid_amount;
        auction.highest_bidder = Some(bidder_address.clone());
        auction.bid_count += 1;
        let bid = Bid {
            bidder: bidder_address.clone(),
            amount: bid_amount,
            timestamp: now,
        };
        storage::record_bid(&env, &auction, &bid);
        storage::extend_instance_ttl(&env);

        log!(&env, "bid accepted", auction_id, bid_amount);
        events::emit_bid_placed(&env, auction_id, bidder_address, bid_amount, now);

        Ok(())
    }

    /// Close an auction and settle its winner.
    ///
    /// Anyone may finalize once the auction has expired; the creator may
    /// also finalize early. Neither the pause flag nor the platform config
    /// is consulted.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction id
    /// * `Error::AlreadyFinalized` - Auction was finalized before
    /// * `Error::Unauthorized` - Auction still running and requester is not the creator
    pub fn finalize_auction(
        env: Env,
        auction_id: u64,
        requester_address: String,
    ) -> Result<(), Error> {
        let now = env.ledger().timestamp();
        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::NotFound)?;

        if auction.is_completed {
            return Err(Error::AlreadyFinalized);
        }
        if !auction.has_expired(now) && requester_address != auction.creator_address {
            return Err(Error::Unauthorized);
        }

        auction.is_active = false;
        auction.is_completed = true;
        storage::record_completed(&env, &auction);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction finalized", auction_id, auction.current_highest_bid);
        events::emit_auction_completed(
            &env,
            auction_id,
            auction.highest_bidder,
            auction.current_highest_bid,
        );

        Ok(())
    }

    // ========== QUERIES ==========

    /// Get an auction record by id
    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::NotFound)
    }

    /// Get the bids on an auction in the order they were accepted
    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::NotFound)?;
        Ok(storage::get_bid_history(&env, &auction))
    }

    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<String>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::NotFound)?;
        Ok((auction.highest_bidder, auction.current_highest_bid))
    }

    pub fn get_auctions_by_creator(env: Env, creator_address: String) -> Vec<u64> {
        storage::get_auctions_by_creator(&env, &creator_address)
    }

    pub fn get_auctions_by_bidder(env: Env, bidder_address: String) -> Vec<u64> {
        storage::get_auctions_by_bidder(&env, &bidder_address)
    }

    pub fn get_auctions_by_winner(env: Env, winner_address: String) -> Vec<u64> {
        storage::get_auctions_by_winner(&env, &winner_address)
    }

    /// Get a page of the auctions still accepting bids, in id order.
    ///
    /// `offset` counts open auctions to skip, not auction ids.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - If `limit` is 0 or greater than 100
    pub fn get_active_auctions(env: Env, offset: u32, limit: u32) -> Result<Vec<Auction>, Error> {
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(Error::InvalidInput);
        }

        let now = env.ledger().timestamp();
        let mut active = Vec::new(&env);
        let mut count = 0u32;
        let mut returned = 0u32;

        for auction_id in 1..=storage::get_auction_counter(&env) {
            if returned >= limit {
                break;
            }
            if let Some(auction) = storage::get_auction(&env, auction_id) {
                if auction.is_open(now) {
                    if count >= offset {
                        active.push_back(auction);
                        returned += 1;
                    }
                    count += 1;
                }
            }
        }

        Ok(active)
    }

    /// Total number of auctions ever created
    pub fn get_auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    // ========== ADMINISTRATION ==========

    pub fn get_config(env: Env) -> Result<PlatformConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    /// Pause or resume auction creation and bidding (admin only).
    /// Finalization stays available while paused.
    pub fn set_paused(env: Env, admin: Address, paused: bool) -> Result<(), Error> {
        let mut config = admin::require_admin(&env, &admin)?;

        config.is_paused = paused;
        config.updated_at = env.ledger().timestamp();
        storage::set_config(&env, &config);

        log!(&env, "platform paused", paused);
        events::emit_platform_paused(&env, admin, paused);
        Ok(())
    }

    /// Hand the admin role to another address (admin only)
    pub fn set_admin(env: Env, current_admin: Address, new_admin: Address) -> Result<(), Error> {
        let mut config = admin::require_admin(&env, &current_admin)?;

        config.admin = new_admin.clone();
        config.updated_at = env.ledger().timestamp();
        storage::set_config(&env, &config);

        events::emit_admin_changed(&env, current_admin, new_admin);
        Ok(())
    }
}

#[cfg(test)]
mod test;
