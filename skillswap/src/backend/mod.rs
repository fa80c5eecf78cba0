//! Access to the SkillSwap REST backend.

mod http;
mod traits;

pub use http::HttpBackend;
pub use traits::SkillSwapBackend;
