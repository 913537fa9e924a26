//! # Report Reader Module
//!
//! Turns the pedal's raw byte stream into position samples.
//!
//! The Diffjoy reports its position as a bare little-endian signed 16-bit
//! word, one word per report, with no framing or report IDs around it.
//! [`SampleReader`] is a forward-only cursor over that stream: each call to
//! [`next_sample`](SampleReader::next_sample) suspends until a full 2-byte
//! report is available or the stream ends.
//!
//! End of stream and I/O failure are distinguishable outcomes here; the
//! caller decides whether to collapse them. A partial trailing read (a single
//! byte before closure) is end of stream, not a malformed sample.

use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Bytes per pedal report
const REPORT_SIZE: usize = 2;

/// Forward-only sample cursor over a pedal report stream
///
/// Wraps any async byte source (the hidraw node in production, a scripted
/// mock in tests) and yields one [`i16`] per 2 bytes consumed. The cursor is
/// not restartable; once it reports end of stream it will keep doing so.
///
/// # Examples
///
/// ```no_run
/// use pedal_pager::device::SampleReader;
///
/// #[tokio::main]
/// async fn main() -> std::io::Result<()> {
///     let handle = tokio::fs::File::open("/dev/hidraw0").await?;
///     let mut samples = SampleReader::new(handle);
///
///     while let Some(raw) = samples.next_sample().await? {
///         println!("pedal position: {}", raw);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SampleReader<R> {
    source: R,
}

impl<R: AsyncRead + Unpin> SampleReader<R> {
    /// Wrap a byte source in a sample cursor
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read the next position sample
    ///
    /// Suspends until 2 bytes are available, then decodes them as a
    /// little-endian signed 16-bit integer.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(sample))` - a full report was read
    /// * `Ok(None)` - the stream ended cleanly, including after a partial
    ///   (1-byte) trailing read
    /// * `Err(e)` - the source failed mid-stream
    pub async fn next_sample(&mut self) -> io::Result<Option<i16>> {
        let mut report = [0u8; REPORT_SIZE];
        match self.source.read_exact(&mut report).await {
            Ok(_) => Ok(Some(i16::from_le_bytes(report))),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::io::Builder;

    /// Little-endian byte stream for a list of samples
    fn stream_bytes(samples: &[i16]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[tokio::test]
    async fn test_reads_samples_in_order() {
        let source = Builder::new().read(&stream_bytes(&[512, -300, 0])).build();
        let mut reader = SampleReader::new(source);

        assert_eq!(reader.next_sample().await.unwrap(), Some(512));
        assert_eq!(reader.next_sample().await.unwrap(), Some(-300));
        assert_eq!(reader.next_sample().await.unwrap(), Some(0));
        assert_eq!(reader.next_sample().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sample_is_little_endian() {
        let source = Builder::new().read(&[0x2C, 0x01]).build();
        let mut reader = SampleReader::new(source);

        assert_eq!(reader.next_sample().await.unwrap(), Some(300));
    }

    #[tokio::test]
    async fn test_report_split_across_reads() {
        // One report delivered a byte at a time still decodes as one sample
        let source = Builder::new().read(&[0xF4]).read(&[0x01]).build();
        let mut reader = SampleReader::new(source);

        assert_eq!(reader.next_sample().await.unwrap(), Some(500));
    }

    #[tokio::test]
    async fn test_empty_stream_ends_cleanly() {
        let source = Builder::new().build();
        let mut reader = SampleReader::new(source);

        assert_eq!(reader.next_sample().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_partial_trailing_read_is_end_of_stream() {
        // A sample followed by a lone trailing byte: the sample decodes, the
        // dangling byte is a clean end, not an error
        let source = Builder::new().read(&[0xF4, 0x01]).read(&[0x05]).build();
        let mut reader = SampleReader::new(source);

        assert_eq!(reader.next_sample().await.unwrap(), Some(500));
        assert_eq!(reader.next_sample().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_io_error_is_distinguishable_from_closure() {
        let source = Builder::new()
            .read(&[0xF4, 0x01])
            .read_error(io::Error::new(io::ErrorKind::Other, "device reset"))
            .build();
        let mut reader = SampleReader::new(source);

        assert_eq!(reader.next_sample().await.unwrap(), Some(500));

        let err = reader.next_sample().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[tokio::test]
    async fn test_negative_full_scale() {
        let source = Builder::new().read(&stream_bytes(&[i16::MIN, i16::MAX])).build();
        let mut reader = SampleReader::new(source);

        assert_eq!(reader.next_sample().await.unwrap(), Some(i16::MIN));
        assert_eq!(reader.next_sample().await.unwrap(), Some(i16::MAX));
    }
}
