pub mod policy;
pub mod refund;
