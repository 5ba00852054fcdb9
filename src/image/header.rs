/// Disc header structures

use crate::format::constants::{FSD_SIGNATURE, HEADER_INFO_SIZE};

/// Creation date, creator and release unpacked from the header info bytes
///
/// Bit layout of the five info bytes (b0..b4):
/// - day: b0 bits 7-3
/// - year: b0 bits 2-0 (high) and b1 (low)
/// - month: b2 bits 3-0
/// - creator: b2 bits 7-4
/// - release: b4 bits 7-6 (high) and b3 (low)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Day of month (1-31 in a well-formed image)
    pub day: u8,
    /// Month (1-12 in a well-formed image)
    pub month: u8,
    /// Year
    pub year: u16,
    /// Creator identifier (4 bits)
    pub creator_id: u8,
    /// Release number (10 bits)
    pub release: u16,
}

impl HeaderInfo {
    /// Unpack the five header info bytes
    pub fn unpack(info: &[u8; HEADER_INFO_SIZE]) -> Self {
        Self {
            day: info[0] >> 3,
            month: info[2] & 0x0F,
            year: (((info[0] & 0x07) as u16) << 8) | info[1] as u16,
            creator_id: info[2] >> 4,
            release: (((info[4] >> 6) as u16) << 8) | info[3] as u16,
        }
    }

    /// Format the creation date as DD-MM-YYYY
    pub fn date_string(&self) -> String {
        format!("{:02}-{:02}-{}", self.day, self.month, self.year)
    }
}

/// FSD disc header: signature, info block and title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscHeader {
    /// Raw info bytes as stored in the file
    pub raw_info: [u8; HEADER_INFO_SIZE],
    /// Disc title, one char per stored byte
    pub title: String,
    /// Unpacked info, absent when the header was decoded plain
    info: Option<HeaderInfo>,
}

impl DiscHeader {
    /// Create a header with unpacked info
    pub fn detailed(raw_info: [u8; HEADER_INFO_SIZE], title: String) -> Self {
        Self {
            raw_info,
            title,
            info: Some(HeaderInfo::unpack(&raw_info)),
        }
    }

    /// Create a header that keeps the info bytes raw
    pub fn plain(raw_info: [u8; HEADER_INFO_SIZE], title: String) -> Self {
        Self {
            raw_info,
            title,
            info: None,
        }
    }

    /// Unpacked info if available
    pub fn info(&self) -> Option<&HeaderInfo> {
        self.info.as_ref()
    }

    /// Encoded size of the header in bytes (signature, info, title and terminator)
    pub fn encoded_len(&self) -> usize {
        FSD_SIGNATURE.len() + HEADER_INFO_SIZE + self.title.chars().count() + 1
    }
}
