/// FSD format magic bytes and constants

/// FSD file signature
pub const FSD_SIGNATURE: &[u8; 3] = b"FSD";

/// Size of the packed date/creator/release block following the signature
pub const HEADER_INFO_SIZE: usize = 5;

/// Readability value marking a track whose sectors carry full detail and data
pub const FULL_INFO: u8 = 255;

/// Bytes of sector ID fields present for every sector (C, H, R, N)
pub const SECTOR_ID_SIZE: usize = 4;

/// FSD sector size code to actual byte size mapping
/// Index: size_code (0-4), Value: actual size in bytes
pub const FSD_SECTOR_SIZES: [usize; 5] = [
    128,    // 0
    256,    // 1
    512,    // 2
    1024,   // 3
    2048,   // 4
];

/// Convert FSD size code to actual byte size
#[inline]
pub fn fsd_size_to_bytes(size_code: u8) -> usize {
    match FSD_SECTOR_SIZES.get(size_code as usize) {
        Some(&size) => size,
        // Undefined codes fall back to the code 0 size
        None => FSD_SECTOR_SIZES[0],
    }
}

/// Check if a size code has a defined size
#[inline]
pub fn is_defined_size_code(size_code: u8) -> bool {
    (size_code as usize) < FSD_SECTOR_SIZES.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fsd_size_to_bytes() {
        assert_eq!(fsd_size_to_bytes(0), 128);
        assert_eq!(fsd_size_to_bytes(1), 256);
        assert_eq!(fsd_size_to_bytes(2), 512);
        assert_eq!(fsd_size_to_bytes(3), 1024);
        assert_eq!(fsd_size_to_bytes(4), 2048);
    }

    #[test]
    fn test_fsd_size_to_bytes_invalid() {
        // Undefined size codes should return the code 0 size
        assert_eq!(fsd_size_to_bytes(5), 128);
        assert_eq!(fsd_size_to_bytes(8), 128);
        assert_eq!(fsd_size_to_bytes(255), 128);
    }

    #[test]
    fn test_is_defined_size_code() {
        assert!(is_defined_size_code(0));
        assert!(is_defined_size_code(4));
        assert!(!is_defined_size_code(5));
    }

    proptest! {
        #[test]
        fn test_undefined_codes_default(code in 5u8..=255) {
            prop_assert_eq!(fsd_size_to_bytes(code), 128);
        }

        #[test]
        fn test_defined_codes_double(code in 0u8..4) {
            prop_assert_eq!(fsd_size_to_bytes(code + 1), fsd_size_to_bytes(code) * 2);
        }
    }
}
