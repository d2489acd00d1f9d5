pub mod dns;
pub mod inventory;
