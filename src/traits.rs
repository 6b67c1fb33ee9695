//! Seams between the request core and the outside world.

use crate::error::TransportError;

/// Fetches the raw body for a fully built request URL.
///
/// Implementations own timeouts and connection handling. The client never
/// retries a failed fetch; transport errors are passed through unchanged.
pub trait Transport: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).fetch(url)
    }
}
