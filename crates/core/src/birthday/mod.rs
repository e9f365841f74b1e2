mod mock_data;
mod types;

pub use mock_data::generate_seed_birthdays;
pub use types::{Birthday, BirthdayList, NewBirthday};
