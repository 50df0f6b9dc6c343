//! Read-only portfolio content.
//!
//! The site's pages are driven by static lists of projects, jobs, and
//! skills. [`catalog::Catalog`] bundles them and [`filter`] holds the
//! narrowing the portfolio and skills pages offer.

pub mod catalog;
pub mod filter;
pub mod model;
