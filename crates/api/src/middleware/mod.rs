//! Extractors that run before a handler body.
//!
//! - [`company::CompanyByCode`] -- Resolves the `{code}` path parameter to a stored company.

pub mod company;
