pub mod batch;
pub mod quantity;
pub mod record;
pub mod table;

pub use batch::{BatchIter, batch, batch_iter, par_batch};
pub use quantity::{Quantity, parse_quantity};
pub use record::{MagnitudeRecord, encode};
pub use table::{MagnitudeTable, MagnitudeTableBuilder};
