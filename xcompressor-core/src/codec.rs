// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The single-layer encode/decode loop: an order-1 context model feeding an adaptive
//! Golomb-Rice bit stream.

use crate::context::ContextTable;
use crate::error::{decode_error, Result};
use crate::estimator::RiceEstimator;
use crate::io::{BitReader, BitWriter};

/// The rank value reserved to mark end-of-stream. Ranks only ever range over `0..=255`, so `256`
/// is never emitted for an actual symbol.
const SENTINEL: u32 = 256;

/// Heuristic pre-allocation hint for the encoded buffer: see the Layer Driver's output-buffer
/// sizing policy. It is a capacity hint only, never a hard cap, since the backing `Vec<u8>`
/// grows on demand.
const CAPACITY_HINT_DIVISOR: usize = 4;

/// The per-run state threaded through a single `compress`/`decompress` call: a fresh
/// [`ContextTable`] and [`RiceEstimator`] pair.
///
/// Unlike the original implementation, which kept this as process-wide global state, it is
/// constructed fresh on the stack for every call, so concurrent encode/decode calls never
/// interfere with one another.
struct CodecState {
    contexts: ContextTable,
    estimator: RiceEstimator,
}

impl CodecState {
    fn new() -> Self {
        CodecState { contexts: ContextTable::new(), estimator: RiceEstimator::new() }
    }
}

/// Encodes `input` into a single self-delimiting Rice-coded bit stream, terminated by the
/// sentinel codeword for `256`.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let mut state = CodecState::new();
    let mut writer = BitWriter::with_capacity(input.len() + input.len() / CAPACITY_HINT_DIVISOR + 16);

    let mut prev: u8 = 0;
    for &c in input {
        let ctx = state.contexts.context_mut(prev);

        let d = u32::from(ctx.rank_of(c));
        writer.write_gr(state.estimator.k(), d);

        ctx.observe(c);
        state.estimator.update(d);

        prev = c;
    }

    writer.write_gr(state.estimator.k(), SENTINEL);

    let out = writer.close();
    log::trace!("compressed {} bytes into {} bytes", input.len(), out.len());
    out
}

/// Decodes a single-layer Rice-coded bit stream produced by [`compress`].
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut state = CodecState::new();
    let mut reader = BitReader::new(input);
    let mut out = Vec::new();

    let mut prev: u8 = 0;
    loop {
        let d = reader.read_gr(state.estimator.k())?;

        if d == SENTINEL {
            break;
        }
        if d > 255 {
            return decode_error("decoded rank exceeds the valid symbol range");
        }

        let ctx = state.contexts.context_mut(prev);
        let c = ctx.symbol_at(d as u8);
        out.push(c);

        ctx.observe(c);
        state.estimator.update(d);

        prev = c;
    }

    log::trace!("decompressed {} bytes from {} input bytes", out.len(), input.len());
    Ok(out)
}
