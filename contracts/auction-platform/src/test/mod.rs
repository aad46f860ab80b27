
use crate::{AuctionPlatform, AuctionPlatformClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    Address, Env, IntoVal, String, Symbol, Val, Vec,
};

pub const START_TIME: u64 = 1_700_000_000;
pub const STARTING_BID: i128 = 10_000_000_000;
pub const DURATION: u64 = 3600;

pub const CREATOR: &str = "lsk24cd35u4jdq8szo3pnsqe5dsxwrnazyqqqg5eu";
pub const BIDDER: &str = "lsk39fj28h4fh29fj39f8h2f98h2f98h2f98h2f98";
pub const OTHER_BIDDER: &str = "lsk8f92h3f98h2f98h2f98h2f98h2f98h2f98h2f9";

/// Fresh platform, initialized, with all auths mocked and the clock at `START_TIME`.
pub fn setup_test() -> (Env, AuctionPlatformClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = START_TIME;
        li.max_entry_ttl = 3_110_400;
    });

    let contract_id = env.register_contract(None, AuctionPlatform);
    let client = AuctionPlatformClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

pub fn lsk(env: &Env, address: &str) -> String {
    String::from_str(env, address)
}

/// Create the "Test Auction" used across the lifecycle tests.
pub fn create_test_auction(env: &Env, client: &AuctionPlatformClient) -> u64 {
    client.create_auction(
        &String::from_str(env, "Test Auction"),
        &String::from_str(env, "https://example.com/image.jpg"),
        &STARTING_BID,
        &DURATION,
        &lsk(env, CREATOR),
    )
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

/// Topics and data of the most recently published event.
pub fn last_event(env: &Env) -> (Vec<Val>, Val) {
    let (_, topics, data) = env.events().all().last().unwrap();
    (topics, data)
}

pub fn event_name(env: &Env, topics: &Vec<Val>) -> Symbol {
    topics.get(0).unwrap().into_val(env)
}
