//! Loading of the RDLibrary cart data dump
//!
//! # Implementation Model
//!
//! A cart dump is read as text, repaired ([`repair_cart_dump`]) so every record sits
//! on one line, and deserialized into [`RivendellCart`] values with the `csv` crate.
//! [`CartLoader`] then applies the filters shared by the `stats` and `filter`
//! commands: excluded groups, macro carts, and extra cuts.

mod cart_loader;
mod csv_repair;
mod rivendell_cart;

pub use cart_loader::{CartLoader, keep_lowest_cuts, parse_carts, read_list_file};
pub use csv_repair::repair_cart_dump;
pub use rivendell_cart::{CartType, RivendellCart};
