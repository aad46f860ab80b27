use soroban_sdk::contracterror;

/// Error codes for the auction platform contract.
/// Codes start at 600 so they never collide with the other MarketX contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 600,
    /// Contract has not been initialized
    NotInitialized = 601,
    /// Caller may not perform this transition
    Unauthorized = 602,
    /// Malformed auction parameters
    InvalidInput = 603,
    /// No auction with the given id
    NotFound = 604,
    /// Auction has expired or is no longer active
    AuctionEnded = 605,
    /// Creator tried to bid on their own auction
    SelfBid = 606,
    /// Bid does not exceed the current highest bid
    BidTooLow = 607,
    /// Auction was already finalized
    AlreadyFinalized = 608,
    /// Platform is paused for new auctions and bids
    PlatformPaused = 609,
}
