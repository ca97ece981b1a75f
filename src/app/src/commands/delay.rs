//! Delay command definitions.
//!
//! The core has no clock of its own; the Shell resolves a delay once the requested time
//! has passed.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DelayRequest {
    pub millis: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DelayResponse {
    Elapsed,
}

impl Operation for DelayRequest {
    type Output = DelayResponse;
}

/// Command-based delay API
pub struct Delay<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Delay<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DelayRequest>> + 'static,
    Event: Send + 'static,
{
    /// Resolve after `millis` milliseconds
    pub fn millis(
        millis: u64,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DelayResponse>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(DelayRequest { millis })
                .into_future(ctx)
                .await
        })
    }
}
