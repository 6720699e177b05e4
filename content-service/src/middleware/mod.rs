pub mod api_key;

pub use api_key::{api_key_matches, RequireApiKey, API_KEY_HEADER};
