//! kvserve: fetch a managed-identity token, fetch one Key Vault secret,
//! serve its value over plain HTTP.

pub mod cli;
pub mod errors;
pub mod imds;
pub mod logging;
pub mod server;
pub mod vault;
