//! Wire encoding for the value kinds the group can carry.
//!
//! Every [`Payload`] is encoded as a single newline-terminated line of ASCII text.
//! The newline is the self-delimiting marker the spec requires: a reader consumes
//! exactly one line per call and leaves whatever follows untouched in the channel's
//! buffer for the next [`Payload::decode`]. The format is internal to this crate and
//! carries no cross-version compatibility guarantee.

use std::io::{self, BufRead, Write};

use crate::edge::Edge;
use crate::error::DecodeError;

/// A value kind that can travel across a channel.
///
/// Implementations must be self-delimiting (`decode` reads exactly one value and no
/// more) and round-trip faithful (`decode(encode(v)) == v`).
pub trait Payload: Sized {
    /// Write one self-delimited message encoding `self` to `out`.
    fn encode<W: Write>(&self, out: &mut W) -> io::Result<()>;

    /// Read exactly one message from `input` and decode it.
    fn decode<R: BufRead>(input: &mut R) -> Result<Self, DecodeError>;
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, DecodeError> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(DecodeError::UnexpectedEof);
    }
    Ok(line)
}

impl Payload for i64 {
    fn encode<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    fn decode<R: BufRead>(input: &mut R) -> Result<Self, DecodeError> {
        let line = read_line(input)?;
        Ok(line.trim().parse()?)
    }
}

impl Payload for Vec<i64> {
    fn encode<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.len())?;
        for v in self {
            write!(out, " {v}")?;
        }
        writeln!(out)
    }

    fn decode<R: BufRead>(input: &mut R) -> Result<Self, DecodeError> {
        let line = read_line(input)?;
        let mut fields = line.trim().split_whitespace();
        let len: usize = fields
            .next()
            .ok_or_else(|| DecodeError::MalformedLine(line.clone()))?
            .parse()?;
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            let field = fields
                .next()
                .ok_or_else(|| DecodeError::MalformedLine(line.clone()))?;
            values.push(field.parse()?);
        }
        Ok(values)
    }
}

impl Payload for Edge {
    fn encode<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} {} {}", self.u, self.v, self.weight)
    }

    fn decode<R: BufRead>(input: &mut R) -> Result<Self, DecodeError> {
        let line = read_line(input)?;
        let mut fields = line.trim().split_whitespace();
        let mut next = || fields.next().ok_or_else(|| DecodeError::MalformedLine(line.clone()));
        let u = next()?.parse()?;
        let v = next()?.parse()?;
        let weight = next()?.parse()?;
        Ok(Edge { u, v, weight })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn round_trip<T: Payload + PartialEq + std::fmt::Debug>(v: T) {
        let mut buf = Vec::new();
        v.encode(&mut buf).unwrap();
        let mut cursor = Cursor::new(buf);
        let back = T::decode(&mut cursor).unwrap();
        assert_eq!(v, back);
    }

    #[test]
    fn integers_round_trip() {
        round_trip(0i64);
        round_trip(123456789i64);
        round_trip(-42i64);
    }

    #[test]
    fn sequences_round_trip() {
        round_trip::<Vec<i64>>(vec![]);
        round_trip(vec![33, 5, 6543, 540, 23, 537, 345, 234, 4, 65, 946]);
    }

    #[test]
    fn edges_round_trip() {
        round_trip(Edge { u: 3, v: 1, weight: 7 });
    }

    #[test]
    fn messages_do_not_consume_past_their_own_line() {
        let mut buf = Vec::new();
        42i64.encode(&mut buf).unwrap();
        7i64.encode(&mut buf).unwrap();
        let mut cursor = Cursor::new(buf);
        assert_eq!(i64::decode(&mut cursor).unwrap(), 42);
        assert_eq!(i64::decode(&mut cursor).unwrap(), 7);
    }

    #[test]
    fn truncated_stream_is_unexpected_eof() {
        let mut cursor = Cursor::new(Vec::new());
        assert!(matches!(
            i64::decode(&mut cursor),
            Err(DecodeError::UnexpectedEof)
        ));
    }
}
