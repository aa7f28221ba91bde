//! Auth-domain identifiers, requested scopes, and resolved identities.

pub mod id;
pub mod identity;
pub mod scope;

pub use id::*;
pub use identity::*;
pub use scope::*;
