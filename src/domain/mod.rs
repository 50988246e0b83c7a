//! Domain types of the counter: money, menu, order lines, the ledger and the
//! port the order worker drives.

pub mod ledger;
pub mod menu;
pub mod money;
pub mod order;
pub mod ports;
pub mod price;
