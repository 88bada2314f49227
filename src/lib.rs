// SPDX-License-Identifier: MPL-2.0
//! `dob_picker` is a wheel-style date-of-birth picker built with the Iced GUI
//! framework.
//!
//! The reusable piece is [`ui::scroll_picker::ScrollPicker`], a snapping
//! wheel over any list of displayable values. [`ui::date_picker`] combines
//! three of them into a day/month/year dialog that keeps the day list in step
//! with the chosen month and year.

#![doc(html_root_url = "https://docs.rs/dob_picker/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
