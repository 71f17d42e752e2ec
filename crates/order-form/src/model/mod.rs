//! Pure data structures shared by the address form and the order ledger.

pub mod address;
pub mod catalog;
pub mod line_item;
pub mod money;

pub use address::*;
pub use catalog::*;
pub use line_item::*;
pub use money::*;
