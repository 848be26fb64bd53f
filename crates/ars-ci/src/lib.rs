// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod prb;

pub use bootstrap::{BootMetric, BootstrapConfig, boot_ci, cod_ci, prd_ci};
pub use prb::{PrbEstimate, prb_ci};
