//! Command handlers for mtdecode

pub mod decode;
