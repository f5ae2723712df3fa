//! HTTP API module for the leave engine.
//!
//! This module provides the REST endpoints the surrounding platform
//! calls to size leave requests and query leave balances.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LeaveBalanceRequest, WorkingHoursRequest};
pub use response::{ApiError, LeaveBalanceResponse, WorkingHoursResponse};
pub use state::AppState;
