#![no_main]

use compressor::{lz77, rle};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit data size to avoid slowdowns
    let data = if data.len() > 64 * 1024 { &data[..64 * 1024] } else { data };

    let encoded = rle::compress(data);
    assert_eq!(rle::decompress(&encoded).unwrap(), data, "RLE round-trip mismatch");

    let encoded = lz77::compress(data);
    assert_eq!(lz77::decompress(&encoded).unwrap(), data, "LZ77 round-trip mismatch");
});
