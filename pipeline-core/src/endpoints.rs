//! The two fixed endpoint stages: the line reader feeding buffer₀ and
//! the line writer draining bufferₙ.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::buffer::{Buffer, PopOutcome, PushOutcome};

/// The sentinel line that terminates input without reaching EOF.
pub const END_SENTINEL: &str = "<END>";

/// Spawns the input-reader endpoint: reads lines from `source`, pushes
/// each (stripped of its terminator) to `output`, and closes `output`
/// on the `<END>` sentinel line or on source EOF — whichever comes
/// first. Only a line consisting of exactly the 5 bytes `<END>` is
/// treated as the sentinel; `<END>` embedded in a longer line is not.
pub fn spawn_reader<R>(mut source: R, output: Arc<Buffer>) -> JoinHandle<io::Result<()>>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        let mut line = String::new();
        loop {
            line.clear();
            let bytes_read = source.read_line(&mut line)?;
            if bytes_read == 0 {
                // EOF without seeing the sentinel.
                output.close();
                return Ok(());
            }

            let stripped = line.strip_suffix('\n').unwrap_or(&line);
            let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);

            if stripped == END_SENTINEL {
                output.close();
                return Ok(());
            }

            if let PushOutcome::Closed(_) = output.push(stripped.as_bytes().to_vec()) {
                // Downstream is gone; nothing left for the reader to do.
                return Ok(());
            }
        }
    })
}

/// Spawns the output-writer endpoint: pops from `input` and writes each
/// item followed by `\n` to `sink`, flushing after every line, until
/// `input` reports end-of-stream.
pub fn spawn_writer<W>(input: Arc<Buffer>, mut sink: W) -> JoinHandle<io::Result<()>>
where
    W: Write + Send + 'static,
{
    thread::spawn(move || loop {
        match input.pop() {
            PopOutcome::Ok(item) => {
                sink.write_all(&item)?;
                sink.write_all(b"\n")?;
                sink.flush()?;
            }
            PopOutcome::End => return Ok(()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use std::io::Cursor;

    #[test]
    fn reader_splits_lines_and_stops_at_sentinel() {
        let buf = Arc::new(Buffer::new(8));
        let source = Cursor::new(b"hello\nworld\n<END>\nignored\n".to_vec());
        let handle = spawn_reader(source, Arc::clone(&buf));
        handle.join().unwrap().unwrap();

        assert_eq!(buf.pop(), PopOutcome::Ok(b"hello".to_vec()));
        assert_eq!(buf.pop(), PopOutcome::Ok(b"world".to_vec()));
        assert_eq!(buf.pop(), PopOutcome::End);
    }

    #[test]
    fn reader_closes_on_eof_without_sentinel() {
        let buf = Arc::new(Buffer::new(8));
        let source = Cursor::new(b"only-line\n".to_vec());
        let handle = spawn_reader(source, Arc::clone(&buf));
        handle.join().unwrap().unwrap();

        assert_eq!(buf.pop(), PopOutcome::Ok(b"only-line".to_vec()));
        assert_eq!(buf.pop(), PopOutcome::End);
    }

    #[test]
    fn embedded_sentinel_is_not_the_sentinel() {
        let buf = Arc::new(Buffer::new(8));
        let source = Cursor::new(b"hello<END>world\n<END>\n".to_vec());
        let handle = spawn_reader(source, Arc::clone(&buf));
        handle.join().unwrap().unwrap();

        assert_eq!(buf.pop(), PopOutcome::Ok(b"hello<END>world".to_vec()));
        assert_eq!(buf.pop(), PopOutcome::End);
    }

    #[derive(Clone, Default)]
    struct SharedSink(Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_emits_newline_terminated_items_until_end() {
        let buf = Arc::new(Buffer::new(8));
        buf.push(b"HELLO".to_vec());
        buf.push(b"WORLD".to_vec());
        buf.close();

        let sink = SharedSink::default();
        let handle = spawn_writer(Arc::clone(&buf), sink.clone());
        handle.join().unwrap().unwrap();

        assert_eq!(&*sink.0.lock().unwrap(), b"HELLO\nWORLD\n");
    }
}
