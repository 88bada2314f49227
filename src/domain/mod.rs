// SPDX-License-Identifier: MPL-2.0
//! Domain layer - calendar rules and value objects, free of any UI concern.
//!
//! # Modules
//!
//! - [`calendar`]: Leap years, day counts and wheel series
//!   ([`YearRange`](calendar::YearRange), [`ReferenceDate`](calendar::ReferenceDate))
//! - [`selection`]: The chosen date ([`DateSelection`](selection::DateSelection),
//!   [`DateField`](selection::DateField))
//! - [`wheel`]: Wheel value objects ([`ItemHeight`](wheel::ItemHeight),
//!   [`SettleDelay`](wheel::SettleDelay), [`WheelIdle`](wheel::WheelIdle))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod calendar;
pub mod diagnostics;
pub mod selection;
pub mod wheel;

pub use calendar::{day_count, is_leap_year, ReferenceDate, YearRange};
pub use selection::{DateField, DateSelection, DayAdjustment};
