// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod cod;
pub mod gini;
pub mod kakwani;
pub mod prb;
pub mod prd;
pub mod ratio;
pub mod standards;

pub use cod::{cod, cod_pair};
pub use gini::gini_pair;
pub use kakwani::{ki, mki};
pub use prb::{OlsFit, prb, prb_fit};
pub use prd::prd;
pub use ratio::ratios;
pub use standards::{cod_met, mki_met, prb_met, prd_met};
