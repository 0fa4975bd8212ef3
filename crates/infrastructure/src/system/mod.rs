pub mod clock;
pub mod token_provider;

pub use clock::SystemClock;
pub use token_provider::{EnvTokenProvider, StaticTokenProvider};
