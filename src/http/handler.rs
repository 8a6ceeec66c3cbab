use crate::http::request::Request;
use crate::http::response::Response;

/// Turns a parsed request into a response.
///
/// Returning `Err` (or panicking) is how a handler reports a fault; the
/// connection layer answers such requests with 500 Internal Server Error
/// and keeps serving. Conditions the client should see, such as a missing
/// file, belong in an ordinary `Ok(Response)`.
pub trait Handler {
    fn handle(&self, request: &Request) -> anyhow::Result<Response>;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> anyhow::Result<Response>,
{
    fn handle(&self, request: &Request) -> anyhow::Result<Response> {
        self(request)
    }
}
