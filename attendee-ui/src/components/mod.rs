// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod attendee_list;
pub mod config_error;
pub mod icons;
pub mod pagination;

mod attendee_row;
