pub mod carnival;
pub mod stall;
pub mod payment;
pub mod revenue_index;


pub use carnival::*;
pub use stall::*;
pub use payment::*;
pub use revenue_index::*;
