pub mod initialize_carnival;
pub mod register_stall;
pub mod set_max_stalls;
pub mod pay_to_stall;
pub mod refund_user;
pub mod withdraw;
pub mod get_top_stalls;

pub use initialize_carnival::*;
pub use register_stall::*;
pub use set_max_stalls::*;
pub use pay_to_stall::*;
pub use refund_user::*;
pub use withdraw::*;
pub use get_top_stalls::*;
