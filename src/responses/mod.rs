pub mod csv;
pub mod errors;
pub mod html;

pub use csv::{csv_response, no_content_response};
pub use errors::ResultResp;
pub use html::{html_response, redirect_response};
