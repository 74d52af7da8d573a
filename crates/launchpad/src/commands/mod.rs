// Command modules for the launchpad CLI

pub mod address;
pub mod create;
pub mod utils;
pub mod wallet;
