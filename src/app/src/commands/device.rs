//! Device command definitions.
//!
//! The switch is reached with plain `GET http://<address>/<path>` requests. These go through a
//! dedicated shell operation instead of `crux_http` because a status fetch must be cut off after
//! a fixed timeout, which the shell enforces.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Request the Shell performs against the device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceRequest {
    pub url: String,
    /// Abort the request after this many milliseconds. `None` leaves it to the transport.
    pub timeout_ms: Option<u64>,
}

// What happened to the request (shell tells us)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceResponse {
    Completed { status: u16, body: Vec<u8> },
    TimedOut,
    Failed { message: String },
}

impl DeviceResponse {
    /// Shorthand for a 200 response with a text body
    pub fn ok(body: impl Into<String>) -> Self {
        DeviceResponse::Completed {
            status: 200,
            body: body.into().into_bytes(),
        }
    }
}

impl Operation for DeviceRequest {
    type Output = DeviceResponse;
}

/// Command-based device API
pub struct Device<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Device<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DeviceRequest>> + 'static,
    Event: Send + 'static,
{
    /// GET the given absolute device URL
    pub fn get(url: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DeviceRequest {
            url: url.into(),
            timeout_ms: None,
        })
    }
}

/// Request builder for device operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    request: DeviceRequest,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DeviceRequest>> + 'static,
    Event: Send + 'static,
{
    fn new(request: DeviceRequest) -> Self {
        Self {
            request,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    pub fn timeout_ms(mut self, millis: u64) -> Self {
        self.request.timeout_ms = Some(millis);
        self
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DeviceResponse>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.request)
                .into_future(ctx)
                .await
        })
    }
}
