//! Off-thread execution of outbound network commands.
//!
//! The UI loop never blocks on the network: each command queued by the
//! application runs on its own thread against the blocking API client,
//! and the completion is delivered back over a channel as a [`NetEvent`].
//! No call carries a timeout; a hung request simply never completes.

use crate::application::{NetEvent, Outbound};
use crate::infrastructure::ApiClient;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Dispatches outbound commands and owns the completion channel's sender.
pub struct ApiWorker {
    client: Arc<ApiClient>,
    tx: Sender<NetEvent>,
}

impl ApiWorker {
    /// Wraps an API client and returns the worker together with the
    /// receiving end the event loop drains.
    pub fn new(client: ApiClient) -> (Self, Receiver<NetEvent>) {
        let (tx, rx) = channel();
        (
            Self {
                client: Arc::new(client),
                tx,
            },
            rx,
        )
    }

    /// Runs one command on a fresh thread, delivering its completion event
    /// when the call resolves.
    pub fn dispatch(&self, command: Outbound) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let event = match command {
                Outbound::FetchTiers { seq } => {
                    tracing::debug!(seq, "fetching membership tiers");
                    NetEvent::TiersLoaded {
                        seq,
                        result: client
                            .list_membership_tiers()
                            .map_err(|err| err.to_string()),
                    }
                }
                Outbound::FetchMealPlans { seq } => {
                    tracing::debug!(seq, "fetching meal plans");
                    NetEvent::MealPlansLoaded {
                        seq,
                        result: client.list_nutrimeal_plans().map_err(|err| err.to_string()),
                    }
                }
                Outbound::SubmitContact { seq, request } => {
                    tracing::info!(seq, "submitting contact inquiry");
                    NetEvent::ContactResolved {
                        seq,
                        result: client.submit_contact(&request).map_err(|err| err.to_string()),
                    }
                }
                Outbound::SubmitBooking { seq, request } => {
                    tracing::info!(seq, "submitting service booking");
                    NetEvent::BookingResolved {
                        seq,
                        result: client.submit_booking(&request).map_err(|err| err.to_string()),
                    }
                }
            };
            // The receiver disappearing just means the app is shutting down
            let _ = tx.send(event);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ClientConfig;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn worker_for(server: &MockServer) -> (ApiWorker, Receiver<NetEvent>) {
        let config = ClientConfig::with_backend_url(server.base_url());
        ApiWorker::new(ApiClient::new(&config).unwrap())
    }

    #[test]
    fn test_dispatch_delivers_tier_completion() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/membership-tiers");
            then.status(200).json_body(serde_json::json!([{
                "id": "student",
                "name": "UWI Life",
                "price": 199,
                "currency": "TTD",
                "billing_cycle": "month",
                "features": []
            }]));
        });

        let (worker, events) = worker_for(&server);
        worker.dispatch(Outbound::FetchTiers { seq: 7 });

        let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
        match event {
            NetEvent::TiersLoaded { seq, result } => {
                assert_eq!(seq, 7);
                assert_eq!(result.unwrap()[0].name, "UWI Life");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_delivers_failures_as_messages() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/membership-tiers");
            then.status(503);
        });

        let (worker, events) = worker_for(&server);
        worker.dispatch(Outbound::FetchTiers { seq: 0 });

        let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
        match event {
            NetEvent::TiersLoaded { result, .. } => {
                assert!(result.unwrap_err().contains("503"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
