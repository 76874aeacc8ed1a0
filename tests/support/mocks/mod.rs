// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod store;
pub mod time;

pub use security::{
    ADMIN_TOKEN, AUTHOR_TOKEN, DummyTokenManager, EXPIRED_TOKEN, OTHER_READER_TOKEN, READER_TOKEN,
};
pub use store::{ADMIN_ID, AUTHOR_ID, InMemoryCms, Interference, OTHER_READER_ID, READER_ID};
pub use time::{DummyClock, fixed_now};
