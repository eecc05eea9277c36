pub mod login;
pub mod offers;

pub use login::login_page;
pub use offers::{offers_page, OffersVm};
