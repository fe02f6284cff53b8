use crate::{Bc4Endpoint, Bc5Block};
use crate::util::decode_bc4_values;
use bcn_inspect_common::{color_f32::ColorF32, decoded_4x4_block::Decoded4x4Block};

/// Decodes a BC5 block into `(u, v, 0, 1)` pixels.
pub fn decode_bc5_block<E: Bc4Endpoint>(bytes: &[u8; 16]) -> Decoded4x4Block<ColorF32> {
    let block = Bc5Block::<E>::from_bytes(bytes);
    let u = decode_bc4_values(&block.u);
    let v = decode_bc4_values(&block.v);

    let mut result = Decoded4x4Block::new(ColorF32::OPAQUE_BLACK);
    for (pixel, value) in result.pixels.iter_mut().enumerate() {
        value.r = u[pixel];
        value.g = v[pixel];
    }
    result
}
