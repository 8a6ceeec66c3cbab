use std::any::Any;
use std::net::SocketAddr;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, error};

use crate::http::handler::Handler;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::{ResponseWriter, serialize_response};

/// Steps of a single request/response exchange.
///
/// Every path ends in `Responded`, so exactly one response is produced
/// for each exchange whatever goes wrong in between.
pub enum ConnectionState<'a> {
    Received(&'a [u8]),
    Parsed(Request),
    ParseFailed(ParseError),
    Dispatched(Response),
    DispatchFailed(anyhow::Error),
    Responded(Vec<u8>),
}

/// Runs raw request bytes through parse, dispatch and serialize.
///
/// Malformed request lines become 400 and handler faults (errors or
/// panics) become 500; neither escapes this function.
pub fn process<H: Handler + ?Sized>(handler: &H, input: &[u8]) -> Vec<u8> {
    let mut state = ConnectionState::Received(input);

    loop {
        state = match state {
            ConnectionState::Received(bytes) => match parse_request(bytes) {
                Ok(request) => ConnectionState::Parsed(request),
                Err(e) => ConnectionState::ParseFailed(e),
            },

            ConnectionState::Parsed(request) => match dispatch(handler, &request) {
                Ok(response) => {
                    debug!(
                        method = %request.method(),
                        path = %request.path(),
                        status = response.status().as_u16(),
                        "Request handled"
                    );
                    ConnectionState::Dispatched(response)
                }
                Err(e) => ConnectionState::DispatchFailed(e),
            },

            ConnectionState::ParseFailed(e) => {
                debug!("Malformed request line: {}", e);
                ConnectionState::Responded(serialize_response(&Response::bad_request()))
            }

            ConnectionState::Dispatched(response) => {
                ConnectionState::Responded(serialize_response(&response))
            }

            ConnectionState::DispatchFailed(e) => {
                error!("Handler failed: {:#}", e);
                ConnectionState::Responded(serialize_response(&Response::internal_error()))
            }

            ConnectionState::Responded(bytes) => return bytes,
        }
    }
}

fn dispatch<H: Handler + ?Sized>(handler: &H, request: &Request) -> anyhow::Result<Response> {
    match catch_unwind(AssertUnwindSafe(|| handler.handle(request))) {
        Ok(result) => result,
        Err(payload) => Err(anyhow::anyhow!("handler panicked: {}", panic_message(&*payload))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}

/// One accepted client socket, good for exactly one exchange.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    max_request_bytes: usize,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, max_request_bytes: usize) -> Self {
        Self {
            stream,
            peer,
            max_request_bytes,
        }
    }

    /// Reads the request, answers it and closes the write side.
    ///
    /// The socket itself is closed when the `Connection` is dropped, which
    /// happens on every exit path of the accept loop.
    pub async fn run<H: Handler + ?Sized>(&mut self, handler: &H) -> anyhow::Result<()> {
        let request = self.read_request().await?;
        debug!(peer = %self.peer, "Request:\n{}", String::from_utf8_lossy(&request).trim_end());

        let response = process(handler, &request);
        debug!(peer = %self.peer, "Response:\n{}", String::from_utf8_lossy(&response).trim_end());

        let mut writer = ResponseWriter::from_bytes(response);
        writer.write_to_stream(&mut self.stream).await?;

        if let Err(e) = self.stream.shutdown().await {
            debug!(peer = %self.peer, "Shutdown after response failed: {}", e);
        }
        Ok(())
    }

    /// A single read of at most `max_request_bytes`. Only the request
    /// line matters, so nothing beyond the first read is waited for.
    pub async fn read_request(&mut self) -> anyhow::Result<Vec<u8>> {
        let mut buffer = vec![0u8; self.max_request_bytes];
        let n = self.stream.read(&mut buffer).await?;
        buffer.truncate(n);
        Ok(buffer)
    }
}
