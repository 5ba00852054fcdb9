/// FSD file reader

use crate::dump::{DumpSink, NullSink, TextDump};
use crate::error::{FsdError, Result};
use crate::format::constants::*;
use crate::format::{is_fsd_signature, DecodeOptions, HeaderStyle};
use crate::image::{
    DiscHeader, FsdImage, Readability, Sector, SectorId, SectorStatus, Track,
};
use crate::io::cursor::ByteCursor;
use crate::stats::Statistics;
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Read and decode an FSD file from disk
pub fn read_fsd<P: AsRef<Path>>(path: P) -> Result<FsdImage> {
    let file = open_source(path.as_ref())?;
    FsdDecoder::new(BufReader::new(file)).decode(NullSink)
}

/// Read an FSD file from disk, writing a text dump of it to `out`
pub fn dump_fsd<P: AsRef<Path>, W: Write>(path: P, out: W) -> Result<FsdImage> {
    let file = open_source(path.as_ref())?;
    let mut dump = TextDump::new(out);
    let image = FsdDecoder::new(BufReader::new(file)).decode(&mut dump)?;
    dump.into_inner()?;
    Ok(image)
}

/// Open an image file for reading
pub fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| FsdError::UnopenableSource {
        path: path.display().to_string(),
        source,
    })
}

/// Single-pass decoder for FSD images
///
/// Every record is streamed to the sink as soon as it is complete. If the
/// decode fails part way, the sink keeps whatever it was given before the
/// failure and no summary is emitted.
pub struct FsdDecoder<R> {
    cursor: ByteCursor<R>,
    options: DecodeOptions,
    stats: Statistics,
}

impl<R: BufRead> FsdDecoder<R> {
    /// Create a decoder with default options
    pub fn new(source: R) -> Self {
        Self::with_options(source, DecodeOptions::default())
    }

    /// Create a decoder with the given options
    pub fn with_options(source: R, options: DecodeOptions) -> Self {
        Self {
            cursor: ByteCursor::new(source),
            options,
            stats: Statistics::new(),
        }
    }

    /// Set the header style
    pub fn header_style(mut self, style: HeaderStyle) -> Self {
        self.options.header_style = style;
        self
    }

    /// Enable or disable statistics collection
    pub fn collect_statistics(mut self, collect: bool) -> Self {
        self.options.collect_statistics = collect;
        self
    }

    /// Get the decode options
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode the whole image, streaming records to `sink`
    pub fn decode<S: DumpSink>(mut self, mut sink: S) -> Result<FsdImage> {
        let header = self.read_header()?;
        let track_count = self.cursor.read_byte()?;

        debug!(
            "FSD header ({} bytes, {} style): title {:?}, {} tracks, info {:02X?}",
            header.encoded_len(),
            self.options.header_style.name(),
            header.title,
            track_count,
            header.raw_info
        );
        sink.render_header(&header, track_count)?;

        let mut tracks = Vec::with_capacity(track_count as usize);
        for physical in 0..track_count {
            tracks.push(self.read_track(physical, &mut sink)?);
        }

        // An I/O error while looking past the last track does not fail the decode
        let trailing_bytes = match self.cursor.is_exhausted() {
            Ok(exhausted) => !exhausted,
            Err(e) => {
                debug!("Could not check for data after last track: {}", e);
                false
            }
        };
        if trailing_bytes {
            debug!(
                "Ignoring data after last track at offset {}",
                self.cursor.position()
            );
        }

        if self.stats.has_summary() {
            sink.render_summary(&self.stats)?;
        }

        Ok(FsdImage {
            header,
            tracks,
            statistics: self.stats,
            trailing_bytes,
        })
    }

    fn read_header(&mut self) -> Result<DiscHeader> {
        let offset = self.cursor.position();
        // A source too short to hold the signature is not an FSD image
        let mut magic = [0u8; 3];
        let mut filled = 0;
        while filled < magic.len() {
            match self.cursor.read_byte() {
                Ok(byte) => magic[filled] = byte,
                Err(e) if e.is_unexpected_eof() => {
                    trace!("Source ended after {} signature bytes", filled);
                    return Err(FsdError::invalid_header(offset, magic));
                }
                Err(e) => return Err(e),
            }
            filled += 1;
        }
        if !is_fsd_signature(&magic) {
            return Err(FsdError::invalid_header(offset, magic));
        }

        let raw_info: [u8; HEADER_INFO_SIZE] = self.cursor.read_array()?;
        let title = self.cursor.read_cstring()?;

        Ok(match self.options.header_style {
            HeaderStyle::Detailed => DiscHeader::detailed(raw_info, title),
            HeaderStyle::Plain => DiscHeader::plain(raw_info, title),
        })
    }

    fn read_track<S: DumpSink>(&mut self, physical: u8, sink: &mut S) -> Result<Track> {
        let track_number = self.cursor.read_byte()?;
        let sector_count = self.cursor.read_byte()?;

        if sector_count == 0 {
            // Unformatted tracks have no readability byte
            trace!("Track {} (logical {}): unformatted", physical, track_number);
            let track = Track::unformatted(physical, track_number);
            sink.render_track(physical, &track)?;
            return Ok(track);
        }

        let readability = Readability::from(self.cursor.read_byte()?);
        debug!(
            "Track {} (logical {}): {} sectors, readability {}",
            physical, track_number, sector_count, readability
        );

        if track_number != physical {
            self.mark(Statistics::mark_non_default_track_ids);
        }
        if readability != Readability::FullInfo {
            self.mark(Statistics::mark_non_readable_track);
        }

        let mut track = Track::formatted(physical, track_number, sector_count, readability);
        sink.render_track(physical, &track)?;

        for index in 0..sector_count {
            let sector = self.read_sector(physical, index, readability)?;
            if sector.info().has_non_default_id() {
                self.mark(Statistics::mark_non_default_sector_ids);
            }
            sink.render_sector(&sector, sector.has_data())?;
            track.add_sector(sector.into_info());
        }

        Ok(track)
    }

    fn read_sector(&mut self, physical: u8, index: u8, readability: Readability) -> Result<Sector> {
        let [track, head, sector, size_code] = self.cursor.read_array::<SECTOR_ID_SIZE>()?;
        let id = SectorId::new(track, head, sector, size_code);

        if track != physical {
            self.mark(Statistics::mark_non_default_track_ids);
        }

        if readability != Readability::FullInfo {
            trace!("Sector {}/{}: {:?} (no data)", physical, index, id);
            return Ok(Sector::id_only(index, id));
        }

        let actual_size_code = self.cursor.read_byte()?;
        let error_code = self.cursor.read_byte()?;
        if !is_defined_size_code(actual_size_code) {
            debug!(
                "Sector {}/{}: undefined size code {}, reading {} bytes",
                physical,
                index,
                actual_size_code,
                fsd_size_to_bytes(actual_size_code)
            );
        }

        let status = SectorStatus::new(actual_size_code, error_code);
        let data = self.cursor.read_bytes(status.actual_size())?;
        if self.options.collect_statistics {
            self.stats.record_sector(actual_size_code, error_code);
        }

        trace!(
            "Sector {}/{}: {:?}, actual size code {}, error {:02X}",
            physical, index, id, actual_size_code, error_code
        );

        Ok(Sector::from_read(index, id, status, data))
    }

    fn mark(&mut self, flag: fn(&mut Statistics)) {
        if self.options.collect_statistics {
            flag(&mut self.stats);
        }
    }
}

/// Decode an FSD image from any buffered source
pub fn decode_fsd<R: BufRead, S: DumpSink>(source: R, sink: S) -> Result<FsdImage> {
    FsdDecoder::new(source).decode(sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(tracks: u8) -> Vec<u8> {
        let mut data = b"FSD".to_vec();
        data.extend_from_slice(&[0x08, 0x01, 0x51, 0x02, 0x40]);
        data.extend_from_slice(b"TEST\0");
        data.push(tracks);
        data
    }

    #[test]
    fn test_wrong_magic() {
        let mut data = header(0);
        data[0] = b'X';
        let err = decode_fsd(&data[..], NullSink).unwrap_err();
        assert!(matches!(
            err,
            FsdError::InvalidHeader { offset: 0, found } if &found == b"XSD"
        ));
    }

    #[test]
    fn test_short_magic() {
        let err = decode_fsd(&b""[..], NullSink).unwrap_err();
        assert!(matches!(
            err,
            FsdError::InvalidHeader { offset: 0, found: [0, 0, 0] }
        ));

        let err = decode_fsd(&b"XY"[..], NullSink).unwrap_err();
        assert!(matches!(
            err,
            FsdError::InvalidHeader { offset: 0, found } if &found == b"XY\0"
        ));
    }

    #[test]
    fn test_short_signature_prefix() {
        // "FS" alone is a truncated signature, not a truncated image
        let err = decode_fsd(&b"FS"[..], NullSink).unwrap_err();
        assert!(matches!(err, FsdError::InvalidHeader { offset: 0, .. }));
    }

    #[test]
    fn test_empty_image() {
        let data = header(0);
        let image = decode_fsd(&data[..], NullSink).unwrap();
        assert_eq!(image.track_count(), 0);
        assert_eq!(image.header().title, "TEST");
        assert!(!image.statistics().has_summary());
        assert!(!image.has_trailing_bytes());
    }

    #[test]
    fn test_unformatted_track_consumes_two_bytes() {
        let mut data = header(1);
        let start = data.len();
        data.extend_from_slice(&[0, 0]);
        assert_eq!(data.len() - start, 2);

        let image = decode_fsd(&data[..], NullSink).unwrap();
        let track = image.get_track(0).unwrap();
        assert!(!track.is_formatted());
        assert_eq!(track.sector_count(), 0);
        assert!(!image.has_trailing_bytes());
        assert!(!image.statistics().has_non_readable_tracks());
    }

    #[test]
    fn test_partial_track_consumes_four_bytes_per_sector() {
        let mut data = header(1);
        data.extend_from_slice(&[0, 2, 0x00]);
        data.extend_from_slice(&[0, 0, 0, 1]);
        data.extend_from_slice(&[0, 0, 1, 1]);

        let image = decode_fsd(&data[..], NullSink).unwrap();
        assert!(!image.has_trailing_bytes());
        assert_eq!(image.total_sectors(), 2);
        assert_eq!(image.readable_sectors(), 0);
        assert!(image.statistics().has_non_readable_tracks());
        assert!(!image.statistics().has_summary());
    }

    #[test]
    fn test_payload_follows_actual_size() {
        let mut data = header(1);
        data.extend_from_slice(&[0, 1, FULL_INFO]);
        // nominal code 2 (512), actual code 0 (128)
        data.extend_from_slice(&[0, 0, 0, 2, 0, 0x00]);
        data.extend(std::iter::repeat(0xE5).take(128));

        let image = decode_fsd(&data[..], NullSink).unwrap();
        assert!(!image.has_trailing_bytes());
        let sector = &image.tracks()[0].sectors()[0];
        assert_eq!(sector.nominal_size(), 512);
        assert_eq!(sector.actual_size(), 128);
        assert!(sector.has_size_mismatch());
    }

    #[test]
    fn test_truncated_payload() {
        let mut data = header(1);
        data.extend_from_slice(&[0, 1, FULL_INFO, 0, 0, 0, 1, 1, 0]);
        let payload_start = data.len() as u64;
        data.extend(std::iter::repeat(0).take(255));

        let err = decode_fsd(&data[..], NullSink).unwrap_err();
        assert!(matches!(
            err,
            FsdError::UnexpectedEndOfInput { offset, needed: 1 } if offset == payload_start + 255
        ));
    }

    #[test]
    fn test_plain_options_skip_statistics() {
        let mut data = header(1);
        data.extend_from_slice(&[5, 1, FULL_INFO, 9, 0, 9, 0, 0, 0x0E]);
        data.extend(std::iter::repeat(0).take(128));

        let image = FsdDecoder::with_options(&data[..], DecodeOptions::plain())
            .decode(NullSink)
            .unwrap();
        assert!(image.header().info().is_none());
        assert_eq!(image.statistics(), &Statistics::new());
        assert_eq!(image.total_sectors(), 1);
    }

    #[test]
    fn test_builder_options() {
        let decoder = FsdDecoder::new(&[0u8; 0][..])
            .header_style(HeaderStyle::Plain)
            .collect_statistics(false);
        assert_eq!(decoder.options(), &DecodeOptions::plain());
    }

    #[test]
    fn test_trailing_bytes() {
        let mut data = header(0);
        data.push(0xAA);
        let image = decode_fsd(&data[..], NullSink).unwrap();
        assert!(image.has_trailing_bytes());
    }

    /// Source that hands out its bytes once, then fails every later read
    struct FailAfterData {
        data: Vec<u8>,
        pos: usize,
    }

    impl std::io::Read for FailAfterData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let available = self.fill_buf()?;
            let n = available.len().min(buf.len());
            buf[..n].copy_from_slice(&available[..n]);
            self.consume(n);
            Ok(n)
        }
    }

    impl BufRead for FailAfterData {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            if self.pos < self.data.len() {
                Ok(&self.data[self.pos..])
            } else {
                Err(std::io::Error::other("device gone"))
            }
        }

        fn consume(&mut self, amt: usize) {
            self.pos += amt;
        }
    }

    #[test]
    fn test_failed_trailing_check_keeps_image() {
        let mut data = header(1);
        data.extend_from_slice(&[0, 1, FULL_INFO, 0, 0, 0, 0, 0, 0x0E]);
        data.extend(std::iter::repeat(0xE5).take(128));

        let source = FailAfterData { data, pos: 0 };
        let image = decode_fsd(source, NullSink).unwrap();
        assert_eq!(image.readable_sectors(), 1);
        assert!(!image.has_trailing_bytes());
        assert!(image.statistics().has_summary());
    }
}
