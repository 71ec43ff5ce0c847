// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-context move-to-front-style symbol ranking.
//!
//! Each of the 256 possible preceding bytes owns an independent [`Context`]: a bijection between
//! symbols and ranks, kept sorted by observed frequency. The codec encodes a byte as its current
//! rank within the context selected by the byte that preceded it.

/// A single frequency-ranked symbol table.
///
/// `sorted` and `order` are always mutual inverse permutations of `0..=255`, and `sorted` is
/// always sorted by `freq` in non-increasing order.
#[derive(Clone)]
pub struct Context {
    freq: [u64; 256],
    sorted: [u8; 256],
    order: [u8; 256],
}

impl Context {
    fn new() -> Self {
        let mut sorted = [0u8; 256];
        let mut order = [0u8; 256];
        for i in 0..256 {
            sorted[i] = i as u8;
            order[i] = i as u8;
        }
        Context { freq: [0; 256], sorted, order }
    }

    /// Returns the current rank of `sym`, i.e. its position in `sorted`.
    #[inline]
    pub fn rank_of(&self, sym: u8) -> u8 {
        self.order[sym as usize]
    }

    /// Returns the symbol currently occupying `rank`.
    #[inline]
    pub fn symbol_at(&self, rank: u8) -> u8 {
        self.sorted[rank as usize]
    }

    /// Records an occurrence of `sym`, promoting it one step towards rank 0 if its updated
    /// frequency now exceeds that of a higher-ranked occupant.
    pub fn observe(&mut self, sym: u8) {
        let sym = sym as usize;

        self.freq[sym] += 1;
        let freq_new = self.freq[sym];

        let ic = self.order[sym] as usize;

        // Walk left from the position just above `sym`'s current rank while the occupant there
        // has a strictly lower frequency than `sym`'s new frequency.
        let mut j: isize = ic as isize - 1;
        while j >= 0 && freq_new > self.freq[self.sorted[j as usize] as usize] {
            j -= 1;
        }
        let target = (j + 1) as usize;

        if target != ic {
            let other = self.sorted[target];
            self.sorted[ic] = other;
            self.sorted[target] = sym as u8;
            self.order[other as usize] = ic as u8;
            self.order[sym] = target as u8;
        }
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        for sym in 0..256u16 {
            if self.sorted[self.order[sym as usize] as usize] != sym as u8 {
                return false;
            }
        }
        for i in 1..256 {
            if self.freq[self.sorted[i - 1] as usize] < self.freq[self.sorted[i] as usize] {
                return false;
            }
        }
        true
    }
}

/// The 256 independent per-preceding-byte [`Context`]s used by a single codec run.
pub struct ContextTable {
    contexts: Vec<Context>,
}

impl ContextTable {
    /// Builds a fresh table: every context starts at the identity ranking with zero frequencies.
    pub fn new() -> Self {
        ContextTable { contexts: (0..256).map(|_| Context::new()).collect() }
    }

    /// Returns the context selected by preceding byte `p`.
    #[inline]
    pub fn context(&self, p: u8) -> &Context {
        &self.contexts[p as usize]
    }

    /// Returns a mutable reference to the context selected by preceding byte `p`.
    #[inline]
    pub fn context_mut(&mut self, p: u8) -> &mut Context {
        &mut self.contexts[p as usize]
    }
}

impl Default for ContextTable {
    fn default() -> Self {
        Self::new()
    }
}
