mod gift_repo;
mod recipient_repo;
mod user_repo;

pub use gift_repo::GiftRepo;
pub use recipient_repo::RecipientRepo;
pub use user_repo::UserRepo;
