// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Adaptive Golomb-Rice parameter estimation.
//!
//! <https://ipnpr.jpl.nasa.gov/progress_report/42-159/159E.pdf>

/// Number of rank samples between parameter re-estimations.
const RESET_INTERVAL: u32 = 256;

/// Tracks the running mean of emitted ranks and derives the Rice parameter `k` from it.
///
/// `k` only changes at epoch boundaries (every [`RESET_INTERVAL`] samples), so an encoder and
/// decoder processing the same symbols in lockstep always agree on which `k` to use next.
pub struct RiceEstimator {
    k: u32,
    sum_delta: u64,
    n: u32,
}

impl RiceEstimator {
    /// Creates a fresh estimator: `k = 3`, no accumulated samples.
    pub fn new() -> Self {
        RiceEstimator { k: 3, sum_delta: 0, n: 0 }
    }

    /// The Rice parameter to use for the *next* codeword.
    #[inline]
    pub fn k(&self) -> u32 {
        self.k
    }

    /// Folds in one more observed rank and, once a full epoch has elapsed, re-derives `k`.
    pub fn update(&mut self, delta: u32) {
        if self.n == RESET_INTERVAL {
            // Largest k such that n * 2^k <= sum_delta.
            let mut k: u32 = 1;
            while (u64::from(self.n) << k) <= self.sum_delta {
                k += 1;
            }
            k -= 1;

            if k != self.k {
                log::trace!("rice parameter re-estimated: {} -> {}", self.k, k);
            }
            self.k = k;

            self.n = 0;
            self.sum_delta = 0;
        }

        self.sum_delta += u64::from(delta);
        self.n += 1;
    }
}

impl Default for RiceEstimator {
    fn default() -> Self {
        Self::new()
    }
}
