/// Reinterprets a raw 32-bit pattern as the f32 with exactly that encoding.
///
/// This is a bit copy, not a numeric cast: every one of the 2^32 patterns
/// is a valid IEEE-754 binary32 encoding, including all NaN payloads and
/// both infinities. The exponent boundary is exact: 0x7F800000 is +Inf,
/// one below it is the largest finite float, one above it is a NaN.
pub fn reinterpret32(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Reinterprets a raw 64-bit pattern as the f64 with exactly that encoding.
///
/// Same boundary behavior as the 32-bit form, at 0x7FF0000000000000.
pub fn reinterpret64(bits: u64) -> f64 {
    f64::from_bits(bits)
}
