// util.rs

use std::io::{ErrorKind, Write};

pub fn write_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    match w.write_all(s.as_ref().as_bytes()).and_then(|_| w.flush()) {
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    match writeln!(w, "{}", s.as_ref()).and_then(|_| w.flush()) {
        Err(ref e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::Other))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_is_swallowed() {
        assert!(writeln_ignore_broken_pipe(ClosedPipe, "x").is_ok());
        assert!(write_ignore_broken_pipe(ClosedPipe, "x").is_ok());
    }

    #[test]
    fn other_errors_surface() {
        assert!(writeln_ignore_broken_pipe(Full, "x").is_err());
    }

    #[test]
    fn writes_line() {
        let mut out = Vec::new();
        writeln_ignore_broken_pipe(&mut out, "1: 0+1=1").unwrap();
        write_ignore_broken_pipe(&mut out, "tail").unwrap();
        assert_eq!(out, b"1: 0+1=1\ntail");
    }
}
