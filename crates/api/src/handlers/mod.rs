//! Request handlers.
//!
//! Each submodule provides async handler functions (list, get, create,
//! update, delete) for one table. Handlers validate input, delegate to the
//! corresponding repository in `biztime_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod companies;
pub mod invoices;
