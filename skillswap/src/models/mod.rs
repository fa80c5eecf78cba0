mod candidate;
mod matches;
mod photo;
mod profile;
mod swipe;
mod user;

pub use candidate::*;
pub use matches::*;
pub use photo::*;
pub use profile::*;
pub use swipe::*;
pub use user::*;
