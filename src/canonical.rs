use crate::{decode, encode, ParseOptions};

/// Reformat table text into the canonical form the serializer produces.
pub fn canonicalize(input: &str) -> String {
    canonicalize_with_options(input, &ParseOptions::default())
}

pub fn canonicalize_with_options(input: &str, options: &ParseOptions) -> String {
    encode::to_string(&decode::from_str(input, options))
}

/// Whether parsing and re-serializing `input` reproduces it byte for byte.
pub fn is_canonical(input: &str) -> bool {
    is_canonical_with_options(input, &ParseOptions::default())
}

pub fn is_canonical_with_options(input: &str, options: &ParseOptions) -> bool {
    canonicalize_with_options(input, options) == input
}
