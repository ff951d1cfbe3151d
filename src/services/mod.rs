pub mod availability_service;
pub mod calendar_service;
pub mod pricing_service;
pub mod refund_service;
