extern crate huffman_codec;

use huffman_codec::{compress_to_vec, decompress_to_vec, tree, Error};

fn main() {
    loop {
        afl::fuzz!(|data: &[u8]| {
            let decoded = match decompress_to_vec(data) {
                Ok(decoded) => decoded,
                Err(Error::MalformedTree(_)) | Err(Error::TruncatedStream { .. }) => return,
                Err(e) => panic!("unexpected error: {}", e),
            };

            let tree = tree::deserialize(data).unwrap();
            let container = match compress_to_vec(&tree, &decoded) {
                Ok(container) => container,
                // The decoder tolerates duplicate leaves; the encoder doesn't.
                Err(Error::MalformedTree(_)) => return,
                Err(e) => panic!("unexpected error: {}", e),
            };
            assert_eq!(decoded, decompress_to_vec(&container).unwrap());
        });
    }
}
