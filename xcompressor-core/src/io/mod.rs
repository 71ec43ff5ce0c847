// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `io` module implements the word-packed, LSB-first bit-level I/O used by the codec.
//!
//! Unlike a general-purpose bit stream, the layout here is fixed: the encoded representation is
//! a sequence of little-endian 32-bit words, bits packed LSB-first within each word. This module
//! does not attempt to generalize beyond that one layout.

mod bit;

pub use bit::{sizeof_gr, BitReader, BitWriter};
