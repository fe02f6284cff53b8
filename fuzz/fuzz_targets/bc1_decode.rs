#![no_main]

// Compares the BC1 decoder against rgbcx-sys using the Ideal method.

use bcn_inspect_bc1::util::decode_bc1_block;
use bcn_inspect_common::color_8888::Color8888;
use bcn_inspect_common::decoded_4x4_block::Decoded4x4Block;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Bc1Block| {
    let ours = decode_bc1_block(&block.bytes);
    let reference = rgbcx_decode_bc1_to_block(&block.bytes);
    assert_eq!(ours, reference, "Decoded blocks don't match");
});

fn rgbcx_decode_bc1_to_block(bc1_block: &[u8; 8]) -> Decoded4x4Block {
    let mut rgba_buffer = [0u8; 4 * 16];
    unsafe {
        rgbcx::unpack_bc1(
            bc1_block.as_ptr() as *const core::ffi::c_void,
            rgba_buffer.as_mut_ptr() as *mut core::ffi::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    let mut block = Decoded4x4Block::new(Color8888::TRANSPARENT);
    for (pixel, rgba) in block.pixels.iter_mut().zip(rgba_buffer.chunks_exact(4)) {
        *pixel = Color8888::new(rgba[0], rgba[1], rgba[2], rgba[3]);
    }
    block
}
