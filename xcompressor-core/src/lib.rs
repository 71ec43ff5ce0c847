// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # xcompressor-core
//!
//! A lossless byte-stream codec built from an order-1 context-adaptive move-to-front symbol
//! ranking and an adaptive Golomb-Rice entropy coder.
//!
//! The crate is organized bottom-up, the same way the algorithm is layered:
//!
//! - [`io`] is the word-packed bit reader/writer and the Golomb-Rice codeword helpers.
//! - [`context`] is the per-preceding-byte frequency ranking model.
//! - [`estimator`] adaptively picks the Rice parameter `k` from the ranks seen so far.
//! - [`codec`] threads a byte stream through the above to produce one self-delimiting,
//!   sentinel-terminated bit stream.
//! - [`layer`] repeatedly re-applies [`codec`] to its own output while that keeps shrinking the
//!   payload, and wraps the result in a one-byte layer-count header.
//!
//! There is no process-wide mutable state: every [`codec::compress`]/[`codec::decompress`] call
//! constructs its own [`context::ContextTable`] and [`estimator::RiceEstimator`], so concurrent
//! calls on independent streams never interfere with one another.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod context;
pub mod error;
pub mod estimator;
pub mod io;
pub mod layer;

pub use error::{Error, Result};
pub use layer::{multi_compress, multi_decompress, LayerOptions};
