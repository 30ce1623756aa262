//! Sign-in with an access token issued by the external identity provider.

pub mod handlers;
