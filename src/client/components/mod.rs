#![allow(non_snake_case)]
mod error_message;
mod time;
mod user_card;
mod user_list;

pub use error_message::ErrorMessage;
pub use time::Time;
pub use user_card::UserCard;
pub use user_list::UserList;
