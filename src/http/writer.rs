use bytes::{BufMut, BytesMut};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::parser::CRLF;
use crate::http::request::Version;
use crate::http::response::Response;

/// Serializes a response to its exact wire form.
///
/// Layout: status line, optional `Content-Type`, optional
/// `Content-Length` (byte length of the body), blank line, body. No other
/// headers are ever written and the order never changes.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let body_len = resp.body().map_or(0, |b| b.len());
    let mut buf = BytesMut::with_capacity(128 + body_len);

    // Status line
    let status_line = format!(
        "{} {} {}",
        Version::Http11,
        resp.status().as_u16(),
        resp.status().reason_phrase()
    );
    buf.put_slice(status_line.as_bytes());
    buf.put_slice(CRLF);

    if let Some(media) = resp.content_type() {
        buf.put_slice(format!("Content-Type: {media}").as_bytes());
        buf.put_slice(CRLF);
    }

    if let Some(body) = resp.body() {
        buf.put_slice(format!("Content-Length: {}", body.len()).as_bytes());
        buf.put_slice(CRLF);
    }

    // Header/body separator
    buf.put_slice(CRLF);

    if let Some(body) = resp.body() {
        buf.put_slice(body);
    }

    buf.to_vec()
}

/// Pushes serialized response bytes onto a stream until all are written.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn from_bytes(buffer: Vec<u8>) -> Self {
        Self { buffer, written: 0 }
    }

    pub fn is_done(&self) -> bool {
        self.written >= self.buffer.len()
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while !self.is_done() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
