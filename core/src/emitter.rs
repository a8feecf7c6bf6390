// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use tokio::sync::mpsc;

use crate::ComposedTimestamp;

/// Receives the composed timestamps a [`DateTimeComposer`](crate::DateTimeComposer) reports.
pub trait Emitter {
    fn emit(&mut self, value: ComposedTimestamp);
}

impl<F> Emitter for F
where
    F: FnMut(ComposedTimestamp),
{
    fn emit(&mut self, value: ComposedTimestamp) {
        self(value)
    }
}

/// Emitter that forwards every value as a message on an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelEmitter(mpsc::UnboundedSender<ComposedTimestamp>);

impl ChannelEmitter {
    /// Creates the emitter together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ComposedTimestamp>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self(tx), rx)
    }
}

impl From<mpsc::UnboundedSender<ComposedTimestamp>> for ChannelEmitter {
    fn from(tx: mpsc::UnboundedSender<ComposedTimestamp>) -> Self {
        Self(tx)
    }
}

impl Emitter for ChannelEmitter {
    fn emit(&mut self, value: ComposedTimestamp) {
        if let Err(e) = self.0.send(value) {
            tracing::debug!(value = %e.0, "receiver dropped, discarding composed timestamp");
        }
    }
}
