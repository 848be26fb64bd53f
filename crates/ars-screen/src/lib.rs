// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod chasing;
pub mod outliers;

pub use chasing::{
    ChasingConfig, ChasingMethod, ChasingResult, SmallSamplePolicy, is_sales_chased,
};
pub use outliers::{OutlierMethod, OutlierResult, is_outlier};
