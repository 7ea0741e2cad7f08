use model::HostEvent;
use tokio::sync::mpsc;

/// Outbound channel to whatever page embeds the widget.
pub trait HostSink {
    /// Hands off an event without waiting for any acknowledgement.
    fn publish(&self, event: HostEvent);
}

/// A sink for running without a host.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl HostSink for Discard {
    fn publish(&self, event: HostEvent) {
        log::trace!("no host attached; discarding {event:?}");
    }
}

impl HostSink for mpsc::UnboundedSender<HostEvent> {
    fn publish(&self, event: HostEvent) {
        if let Err(mpsc::error::SendError(event)) = self.send(event) {
            log::debug!("host channel closed; dropped {event:?}");
        }
    }
}

impl<S: HostSink + ?Sized> HostSink for &S {
    fn publish(&self, event: HostEvent) {
        (**self).publish(event)
    }
}
