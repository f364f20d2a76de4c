//! Core of the study-file dashboard: the record model, the storage codec,
//! the persisted store and the session controller the Yew surfaces drive.

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod routing;
pub mod sanitize;
pub mod session;
pub mod storage;

pub use error::{Error, Result};
