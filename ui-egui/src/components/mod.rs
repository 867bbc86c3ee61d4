// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reusable UI components

pub mod board;
