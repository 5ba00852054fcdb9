/// Rendering of decoded records

use crate::error::Result;
use crate::format::constants::fsd_size_to_bytes;
use crate::image::{DiscHeader, Sector, Track};
use crate::stats::Statistics;
use std::io::Write;

/// Bytes shown on each hex dump line
pub const BYTES_PER_LINE: usize = 16;

/// Receiver for records as the decoder produces them
///
/// Calls arrive in decode order: the header once, then each track followed
/// by its sectors, then the summary if there is one. Every method defaults
/// to doing nothing. An error returned from any method aborts the decode.
pub trait DumpSink {
    /// Called once after the header and track count have been read
    fn render_header(&mut self, _header: &DiscHeader, _track_count: u8) -> Result<()> {
        Ok(())
    }

    /// Called for each track before its sectors
    fn render_track(&mut self, _physical_index: u8, _track: &Track) -> Result<()> {
        Ok(())
    }

    /// Called for each sector; the data is only borrowed for this call
    fn render_sector(&mut self, _sector: &Sector, _has_payload: bool) -> Result<()> {
        Ok(())
    }

    /// Called after the last track when there are statistics to report
    fn render_summary(&mut self, _stats: &Statistics) -> Result<()> {
        Ok(())
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DumpSink for NullSink {}

impl<S: DumpSink + ?Sized> DumpSink for &mut S {
    fn render_header(&mut self, header: &DiscHeader, track_count: u8) -> Result<()> {
        (**self).render_header(header, track_count)
    }

    fn render_track(&mut self, physical_index: u8, track: &Track) -> Result<()> {
        (**self).render_track(physical_index, track)
    }

    fn render_sector(&mut self, sector: &Sector, has_payload: bool) -> Result<()> {
        (**self).render_sector(sector, has_payload)
    }

    fn render_summary(&mut self, stats: &Statistics) -> Result<()> {
        (**self).render_summary(stats)
    }
}

/// Text renderer producing a line-oriented dump of the image
pub struct TextDump<W: Write> {
    out: W,
    current_track: u8,
}

impl<W: Write> TextDump<W> {
    /// Create a text dump writing to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            current_track: 0,
        }
    }

    /// Flush and give back the writer
    pub fn into_inner(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> DumpSink for TextDump<W> {
    fn render_header(&mut self, header: &DiscHeader, track_count: u8) -> Result<()> {
        match header.info() {
            Some(info) => {
                writeln!(self.out, "Date: {}", info.date_string())?;
                writeln!(self.out, "CreatorID: {}", info.creator_id)?;
                writeln!(self.out, "Release: {}", info.release)?;
            }
            None => {
                let raw: Vec<String> = header.raw_info.iter().map(|b| format!("{:02X}", b)).collect();
                writeln!(self.out, "Info: {}", raw.join(" "))?;
            }
        }
        writeln!(self.out, "Disc Title: {}", header.title)?;
        writeln!(self.out, "Tracks: {}", track_count)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn render_track(&mut self, _physical_index: u8, track: &Track) -> Result<()> {
        self.current_track = track.track_number;

        writeln!(self.out, "Track: {}", track.track_number)?;
        writeln!(self.out, "Sectors: {}", track.declared_sectors)?;
        if let Some(readability) = track.readability {
            writeln!(self.out, "Readable: {}", readability)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn render_sector(&mut self, sector: &Sector, has_payload: bool) -> Result<()> {
        let id = sector.id();

        writeln!(self.out, "Track {}, Sector {}", self.current_track, sector.info().index)?;
        writeln!(self.out, "Logical Track ID: {}", id.track)?;
        writeln!(self.out, "Head Number: {}", id.head)?;
        writeln!(self.out, "Logical Sector ID: {}", id.sector)?;
        writeln!(
            self.out,
            "Reported Sector Length: {} ({} bytes)",
            id.size_code,
            id.size_bytes()
        )?;

        match sector.status() {
            Some(status) if has_payload => {
                writeln!(
                    self.out,
                    "Actual Sector Length: {} ({} bytes)",
                    status.actual_size_code,
                    status.actual_size()
                )?;
                writeln!(self.out, "Sector Error: {:02X}", status.error_code)?;
                writeln!(self.out)?;
                hex_dump(sector.data(), &mut self.out)?;
                writeln!(self.out)?;
            }
            _ => writeln!(self.out)?,
        }
        Ok(())
    }

    fn render_summary(&mut self, stats: &Statistics) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Summary")?;
        writeln!(self.out, "-------")?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Non-Default Track IDs: {}",
            yes_no(stats.has_non_default_track_ids())
        )?;
        writeln!(
            self.out,
            "Non-Default Sector IDs: {}",
            yes_no(stats.has_non_default_sector_ids())
        )?;
        writeln!(
            self.out,
            "Non-Readable Tracks: {}",
            yes_no(stats.has_non_readable_tracks())
        )?;

        writeln!(self.out)?;
        writeln!(self.out, "Sector Sizes:")?;
        writeln!(self.out)?;
        for (code, count) in stats.size_codes() {
            writeln!(self.out, "{} ({} bytes): {}", code, fsd_size_to_bytes(*code), count)?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "Sector Error Codes:")?;
        writeln!(self.out)?;
        for (code, count) in stats.error_codes() {
            writeln!(self.out, "{:02X}: {}", code, count)?;
        }
        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Check if a byte is shown as itself in the character column
#[inline]
pub fn is_printable(byte: u8) -> bool {
    (0x20..0x7F).contains(&byte)
}

/// Write a hex and character dump, 16 bytes per line
///
/// Each line holds the hex values (each followed by a space), one more
/// space, then the same bytes as characters with non-printable bytes shown
/// as `.`. A short final line is not padded.
pub fn hex_dump<W: Write + ?Sized>(data: &[u8], out: &mut W) -> Result<()> {
    for chunk in data.chunks(BYTES_PER_LINE) {
        let mut line = String::with_capacity(BYTES_PER_LINE * 4 + 1);

        for byte in chunk {
            line.push_str(&format!("{:02X} ", byte));
        }

        line.push(' ');

        for &byte in chunk {
            line.push(if is_printable(byte) { byte as char } else { '.' });
        }

        writeln!(out, "{}", line)?;
    }
    Ok(())
}
