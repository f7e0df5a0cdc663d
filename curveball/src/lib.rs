#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

pub mod commitment;
pub mod config;
pub mod prompt;
pub mod session;

mod error;

pub use crate::{
    commitment::Commitment,
    config::Config,
    error::{Error, Result},
    session::{CurveChoice, Session, State, WISH_PHRASE, WishOutcome},
};
pub use weierstrass;
