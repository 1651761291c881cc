//! Account backend abstraction
//!
//! There is no real service yet; `StubBackend` simulates one.

mod stub;
mod traits;

pub use stub::StubBackend;
pub use traits::{AccountId, AccountRole, AuthBackend, AuthError, Session, SignupProfile};

#[cfg(test)]
pub use traits::MockAuthBackend;
