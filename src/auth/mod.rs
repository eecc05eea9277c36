pub mod credentials;
pub mod sessions;

pub use credentials::{login, AuthError, Identity};
pub use sessions::{clear_session, load_session, save_session};
