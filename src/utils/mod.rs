//! Request helpers.
//!
//! - [`client_ip`] - Client address resolution behind reverse proxies

pub mod client_ip;
