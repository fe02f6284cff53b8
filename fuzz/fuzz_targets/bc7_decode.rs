#![no_main]

// Compares the BC7 decoder against bcdec_rs. Reserved mode blocks are skipped.

use bcn_inspect_bc7::util::decode_bc7_block;
use bcn_inspect_common::color_8888::Color8888;
use bcn_inspect_common::decoded_4x4_block::Decoded4x4Block;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc7Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc7Block| {
    let Ok(ours) = decode_bc7_block(&block.bytes) else {
        return;
    };

    let mut rgba_buffer = [0u8; 4 * 16];
    bcdec_rs::bc7(&block.bytes, &mut rgba_buffer, 4 * 4);

    let mut reference = Decoded4x4Block::new(Color8888::TRANSPARENT);
    for (pixel, rgba) in reference.pixels.iter_mut().zip(rgba_buffer.chunks_exact(4)) {
        *pixel = Color8888::new(rgba[0], rgba[1], rgba[2], rgba[3]);
    }
    assert_eq!(ours, reference, "Decoded blocks don't match");
});
