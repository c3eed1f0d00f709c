//! External service clients.

pub mod coach;
