#![no_main]

use compressor::{lz77, rle};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either decode or fail cleanly, never panic.
    // Anything that does decode must re-encode to something that decodes the same.
    if let Ok(decoded) = rle::decompress(data) {
        assert_eq!(rle::decompress(&rle::compress(&decoded)).unwrap(), decoded);
    }

    if let Ok(decoded) = lz77::decompress(data) {
        assert_eq!(lz77::decompress(&lz77::compress(&decoded)).unwrap(), decoded);
    }
});
