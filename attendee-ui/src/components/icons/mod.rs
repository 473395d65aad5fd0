// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod chevron;
pub mod more;
pub mod search;
