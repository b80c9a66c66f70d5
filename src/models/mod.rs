pub mod index;
pub mod person;
pub mod week;

pub use index::Index;
pub use person::{ClassGroup, Email, Github, Name, Phone, Telegram};
pub use week::Week;
