// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The multi-layer container: repeatedly re-applies the codec to its own output while that
//! keeps shrinking the payload, and wraps the result in a one-byte layer-count header.

use crate::codec;
use crate::error::{decode_error, Result};

/// Upper bound on the number of layers a container header can name.
const MAX_LAYER_COUNT: u32 = 255;

/// Options controlling the multi-layer driver.
///
/// `Default` mirrors the `-1` CLI flag (single-layer, the CLI's own default): the capped
/// `max_layers` means the loop can only ever produce one layer, and `min_layers` being above
/// that cap means it is always produced unconditionally, win or lose on size.
#[derive(Copy, Clone, Debug)]
pub struct LayerOptions {
    /// Keep re-encoding until at least this many layers have been produced, even if a layer
    /// doesn't shrink the payload. Default: `3`.
    pub min_layers: u32,
    /// Never produce more than this many layers. Must be `<= 255`, since the layer count is
    /// stored in a single header byte. Default: `1`.
    pub max_layers: u32,
}

impl Default for LayerOptions {
    fn default() -> Self {
        LayerOptions { min_layers: 3, max_layers: 1 }
    }
}

impl LayerOptions {
    /// Store-only mode: the container holds the plaintext verbatim behind a `J = 0` header.
    pub fn store_only() -> Self {
        LayerOptions { min_layers: 0, max_layers: 0 }
    }

    /// The original C driver's `-9`: re-encode up to the maximum layer count the header byte can
    /// represent, stopping early once further layers stop paying off.
    pub fn max() -> Self {
        LayerOptions { min_layers: 3, max_layers: MAX_LAYER_COUNT }
    }
}

/// Encodes `input` through as many codec layers as [`LayerOptions`] calls for, and returns the
/// container: a one-byte layer count followed by the innermost layer's bytes.
///
/// The driver is a loop, not recursion, so `max_layers = 255` never deepens the call stack.
pub fn multi_compress(input: &[u8], opts: &LayerOptions) -> Vec<u8> {
    let max_layers = opts.max_layers.min(MAX_LAYER_COUNT);

    let mut layers: Vec<Vec<u8>> = Vec::with_capacity(1);
    layers.push(input.to_vec());

    let mut j: u32 = 0;
    while j + 1 <= max_layers {
        let next = codec::compress(&layers[j as usize]);
        let keep_going = next.len() < layers[j as usize].len() || j + 1 < opts.min_layers;

        layers.push(next);
        j += 1;

        if !keep_going {
            break;
        }
    }

    // The loop above may have taken one layer too many if the final encode didn't shrink the
    // payload and `min_layers` was already satisfied; keep whichever of the last two is smaller.
    if layers.len() >= 2 {
        let last = layers.len() - 1;
        if layers[last].len() >= layers[last - 1].len() && (last as u32) >= opts.min_layers {
            layers.pop();
        }
    }

    let chosen = (layers.len() - 1) as u8;
    log::debug!(
        "multi_compress: {} byte(s) in, {} layer(s), {} byte(s) out",
        input.len(),
        chosen,
        layers.last().map(Vec::len).unwrap_or(0)
    );

    let mut out = Vec::with_capacity(1 + layers.last().map(Vec::len).unwrap_or(0));
    out.push(chosen);
    out.extend_from_slice(layers.last().unwrap());
    out
}

/// Decodes a container produced by [`multi_compress`], unwinding each layer in turn.
pub fn multi_decompress(input: &[u8]) -> Result<Vec<u8>> {
    let (&header, body) = match input.split_first() {
        Some(parts) => parts,
        None => return decode_error("multi-layer container is missing its header byte"),
    };

    let mut payload = body.to_vec();
    for _ in 0..header {
        payload = codec::decompress(&payload)?;
    }

    log::debug!("multi_decompress: {} layer(s), {} byte(s) out", header, payload.len());
    Ok(payload)
}
