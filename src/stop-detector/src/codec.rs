use std::marker::PhantomData;

use bytes::{Buf, BytesMut};
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use tokio_util::codec::Decoder;

use crate::error::{
    JsonRecordError,
    json_record::{DecodeSnafu, RecordTooLongSnafu},
};

/// Decodes a stream of json values separated by any amount of whitespace.
///
/// Values are not tied to lines: several records may share a line and a single pretty printed
/// record may span many.
#[derive(Debug)]
pub struct JsonRecordCodec<T> {
    max_length: usize,
    offset: usize,
    record: PhantomData<fn() -> T>,
}

impl<T> JsonRecordCodec<T> {
    /// `max_length` bounds the encoded size of a single record.
    pub fn new(max_length: usize) -> Self {
        JsonRecordCodec {
            max_length,
            offset: 0,
            record: PhantomData,
        }
    }

    /// Byte offset in the source of the next undecoded record.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn skip_whitespace(&mut self, buf: &mut BytesMut) {
        let n = buf
            .iter()
            .take_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
            .count();
        buf.advance(n);
        self.offset += n;
    }
}

impl<T: DeserializeOwned> JsonRecordCodec<T> {
    fn next_record(&mut self, buf: &mut BytesMut, eof: bool) -> Result<Option<T>, JsonRecordError> {
        self.skip_whitespace(buf);
        if buf.is_empty() {
            return Ok(None);
        }

        let next = {
            let mut records = serde_json::Deserializer::from_slice(&buf[..]).into_iter::<T>();
            records
                .next()
                .map(|r| r.map(|record| (record, records.byte_offset())))
        };

        match next {
            Some(Ok((_, consumed))) if consumed > self.max_length => RecordTooLongSnafu {
                offset: self.offset,
                max_length: self.max_length,
            }
            .fail(),
            Some(Ok((record, consumed))) => {
                buf.advance(consumed);
                self.offset += consumed;
                Ok(Some(record))
            }
            // Incomplete record, wait for more input.
            Some(Err(e)) if e.is_eof() && !eof => {
                if buf.len() > self.max_length {
                    RecordTooLongSnafu {
                        offset: self.offset,
                        max_length: self.max_length,
                    }
                    .fail()
                } else {
                    Ok(None)
                }
            }
            Some(Err(e)) => Err(e).context(DecodeSnafu {
                offset: self.offset,
            }),
            None => Ok(None),
        }
    }
}

impl<T: DeserializeOwned> Decoder for JsonRecordCodec<T> {
    type Item = T;
    type Error = JsonRecordError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<T>, JsonRecordError> {
        self.next_record(buf, false)
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<T>, JsonRecordError> {
        self.next_record(buf, true)
    }
}
