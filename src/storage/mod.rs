//! Encrypted local storage for completed responses and their classification.

mod encrypted;

pub use encrypted::ResponseStore;
