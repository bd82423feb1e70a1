// SPDX-License-Identifier: MPL-2.0
pub mod confetti;

pub use confetti::ConfettiLayer;
