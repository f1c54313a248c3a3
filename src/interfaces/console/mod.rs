//! Line-oriented console protocol: `LEVANTAR`, `MOEDA`, `T=`, `ABORTAR` in,
//! `machine> ` replies out.

pub mod reader;
pub mod session;
pub mod writer;
