pub mod account_verified;

pub use account_verified::AccountVerifiedEvent;
