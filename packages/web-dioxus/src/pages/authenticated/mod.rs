//! Pages reachable with a logged-in session

mod account;
mod home;
mod places;
mod ride;
mod settings;

pub use account::EditAccount;
pub use home::Home;
pub use places::{AddPlace, FindAddress, Places};
pub use ride::Ride;
pub use settings::Settings;
