use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the auction platform.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Platform configuration (instance)
    Config,
    /// Last assigned auction id (instance)
    AuctionCounter,
    /// Auction record by id
    Auction(u64),
    /// The n-th accepted bid on an auction, keyed by (auction id, n)
    Bid(u64, u32),
    /// Auction ids created by an address
    AuctionsByCreator(String),
    /// Auction ids an address has bid on
    AuctionsByBidder(String),
    /// Auction ids won by an address
    AuctionsByWinner(String),
}

/// An auction record.
///
/// `current_highest_bid` is 0 until the first bid lands. `is_active` and
/// `is_completed` only change together, in `finalize_auction`. `bid_count`
/// is the length of the bid history stored under `StorageKey::Bid`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub item_name: String,
    pub item_image_url: String,
    pub creator_address: String,
    pub starting_bid: i128,
    pub current_highest_bid: i128,
    pub highest_bidder: Option<String>,
    pub created_timestamp: u64,
    pub end_timestamp: u64,
    pub is_active: bool,
    pub is_completed: bool,
    pub bid_count: u32,
}

impl Auction {
    /// Whether bids are still accepted at `now`.
    pub fn is_open(&self, now: u64) -> bool {
        self.is_active && now < self.end_timestamp
    }

    pub fn has_expired(&self, now: u64) -> bool {
        now >= self.end_timestamp
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: String,
    pub amount: i128,
    pub timestamp: u64,
}

/// Platform configuration, set by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformConfig {
    pub admin: Address,
    pub is_paused: bool,
    pub updated_at: u64,
}
