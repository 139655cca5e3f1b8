//! Adapters handing settings to the database and cache clients.

pub mod cache;
pub mod db;
