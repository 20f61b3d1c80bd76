//! Error handling for the coffeu client.
//!
//! Failures are layered:
//!
//! - [`crate::traits::HttpError`]: the request never got an answer
//! - [`crate::api::ApiError`]: transport, non-2xx status, or bad body
//! - [`ValidationError`]: local input checks, no request sent
//! - [`AppError`]: what a state holder operation can fail with
//!
//! [`AppError::category`] maps every failure onto an [`ErrorCategory`], and
//! [`AppError::user_message`] turns it into the text kept in state.
//!
//! | Category | Source | Message |
//! |----------|--------|---------|
//! | Validation | local checks | the check's own text |
//! | Rejected | non-2xx | per operation |
//! | Connectivity | connect, timeout, I/O | fixed |
//! | Unexpected | decode and the rest | fixed |

mod app_error;
mod category;
mod validation;

pub use app_error::{AppError, Operation, CONNECTIVITY_MESSAGE, UNEXPECTED_MESSAGE};
pub use category::ErrorCategory;
pub use validation::{
    check_login, check_otp, check_register, is_blank, ValidationError, OTP_LENGTH,
};
