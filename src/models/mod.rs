pub mod canteen;
pub mod transaction;
pub mod user;

pub use canteen::{Canteen, Coordinate, Marker, Stall};
pub use transaction::{Transaction, TransactionStatus};
pub use user::User;
