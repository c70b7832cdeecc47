pub mod advert;
pub mod user;
