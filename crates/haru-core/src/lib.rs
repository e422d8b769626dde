//! # Haru Core Library
//!
//! Calendar event definitions and bounded recurrence expansion.
//!
//! ## Features
//!
//! - **Closed Repeat Rules**: Repeat types are a closed enum over
//!   none/daily/weekly/monthly/yearly, so malformed rules are
//!   unrepresentable instead of silently tolerated
//! - **Anchor-Relative Stepping**: Every occurrence is computed from the
//!   anchor date plus k*interval units, so skipped months or years never
//!   shift later occurrences
//! - **Calendar-Faithful Skipping**: Months without the anchor's
//!   day-of-month and non-leap Februaries produce no occurrence at all,
//!   never a substituted neighbor date
//! - **Bounded Horizon**: Expansion is capped by an injectable planning
//!   horizon in addition to any rule end date
//!
//! ## Core Modules
//!
//! - [`models`]: Event records and repeat rules
//! - [`recurrence`]: The recurrence expansion engine
//! - [`error`]: Error types for boundary validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use haru_core::models::{NewEventData, RepeatRule, RepeatType};
//! use haru_core::recurrence::RecurrenceExpander;
//!
//! let event = NewEventData {
//!     title: "Daily standup".to_string(),
//!     date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
//!     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     end_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
//!     description: String::new(),
//!     location: String::new(),
//!     category: "work".to_string(),
//!     repeat: RepeatRule {
//!         repeat_type: RepeatType::Daily,
//!         interval: 1,
//!         end_date: NaiveDate::from_ymd_opt(2025, 10, 30),
//!     },
//!     notification_time: 10,
//! };
//!
//! let expander = RecurrenceExpander::with_defaults();
//! let occurrences = expander.expand(&event);
//! assert_eq!(occurrences.len(), 30);
//! ```

pub mod error;
pub mod models;
pub mod recurrence;
