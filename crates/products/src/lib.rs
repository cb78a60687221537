//! Products domain module.
//!
//! A product is a plain value: a manufacturer name behind an accessor pair and
//! an openly writable price. No IO, no storage.

pub mod product;

pub use product::Product;
