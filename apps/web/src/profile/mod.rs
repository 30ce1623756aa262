//! The signed-in user's profile form.

pub mod handlers;
