mod client;
mod errors;
pub mod normalize;
mod request;
mod response;
mod session;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::normalize::normalize;
pub use self::request::ApiRequest;
pub use self::response::{ResponseBody, DEFAULT_ERROR_MESSAGE};
pub use self::session::{MemorySession, SessionError, TokenStore};
pub use reqwest::Method;
