//! Output sink adapter: the boundary between the rasterizer and the
//! two-channel analog output that positions the display beam.

/// Full-scale value of a 12-bit DAC channel (e.g. Teensy 3.x A21/A22).
pub const DAC_MAX_12BIT: i32 = 4095;

/// Full-scale value of a 10-bit DAC channel.
pub const DAC_MAX_10BIT: i32 = 1023;

/// The physical two-channel writer. Implementations position the beam at
/// the given coordinates; they never see out-of-range values.
pub trait DacWriter {
    fn write_xy(&mut self, x: u16, y: u16);
}

/// Range-guarded pass-through to a [`DacWriter`].
///
/// Samples with either coordinate outside `[0, max]` are silently dropped:
/// never driving the beam off-screen takes priority over reporting. Within
/// range the sample is forwarded bit-exact, with no queuing and no
/// interpolation.
pub struct OutputSink<W: DacWriter> {
    writer: W,
    max_x: i32,
    max_y: i32,
}

impl<W: DacWriter> OutputSink<W> {
    /// Create a sink with explicit per-channel ceilings.
    pub fn new(writer: W, max_x: i32, max_y: i32) -> Self {
        Self {
            writer,
            max_x,
            max_y,
        }
    }

    /// Forward a coordinate pair to the writer if it is representable.
    #[inline]
    pub fn write(&mut self, x: i32, y: i32) {
        if x >= 0 && x <= self.max_x && y >= 0 && y <= self.max_y {
            self.writer.write_xy(x as u16, y as u16);
        }
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Test writer that records every sample it receives.
#[derive(Debug, Default)]
pub struct CaptureWriter {
    pub samples: Vec<(u16, u16)>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<(u16, u16)> {
        self.samples.last().copied()
    }
}

impl DacWriter for CaptureWriter {
    fn write_xy(&mut self, x: u16, y: u16) {
        self.samples.push((x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_passes_through() {
        let mut sink = OutputSink::new(CaptureWriter::new(), DAC_MAX_12BIT, DAC_MAX_12BIT);
        sink.write(0, 0);
        sink.write(4095, 4095);
        sink.write(123, 456);
        assert_eq!(
            sink.writer().samples,
            vec![(0, 0), (4095, 4095), (123, 456)]
        );
    }

    #[test]
    fn test_out_of_range_dropped() {
        let mut sink = OutputSink::new(CaptureWriter::new(), DAC_MAX_10BIT, DAC_MAX_10BIT);
        sink.write(-1, 5);
        sink.write(5, -1);
        sink.write(1024, 5);
        sink.write(5, 1024);
        assert!(sink.writer().samples.is_empty());
    }
}
