pub mod provider;
pub mod session;

pub use provider::{AuthError, AuthProvider, HttpAuthProvider};
pub use session::{Session, SessionContext, SessionReader};
