//! PokeAPI list client.

mod body;
mod client;
mod error;

pub use body::parse_list_body;
pub use client::{list_url, ApiClient};
pub use error::{FetchError, FETCH_FAILED_MESSAGE};
