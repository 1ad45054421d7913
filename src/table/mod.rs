//! Dense tables and sector labels shared by every analysis stage.

pub mod io_table;
pub mod matrix;
pub mod sectors;

pub use io_table::IoTable;
pub use matrix::Matrix;
pub use sectors::SectorSet;
