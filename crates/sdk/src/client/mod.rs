pub mod connection;
pub mod launcher;
pub mod wallet;

pub use connection::{Connection, RpcConnection};
pub use launcher::TokenLauncher;
pub use wallet::{DisconnectedWallet, KeypairWallet, Wallet};
