//! Computation core for the booking marketplace client: cancellation/refund
//! policies, booking date-range selection, and the calendar availability
//! client that feeds the selector.

pub mod models;
pub mod services;
