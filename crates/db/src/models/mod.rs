pub mod gift;
pub mod recipient;
pub mod user;
