//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Fan-out consumer for the telemetry pipeline graph
//!
//! Splits one payload to N downstream consumers under the copy policy:
//! branches that declared mutates-data each get an independent deep copy,
//! read-only branches share the original record storage. The copy decision
//! per branch is fixed at build time. The fan-out holds no mutable state,
//! so concurrent upstream callers need no synchronization here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{GraphError, GraphResult};
use crate::traits::{ConsumerCapabilities, TelemetryConsumer};
use crate::types::TelemetryPayload;

/// Build the downstream consumer for a node with the given branches
///
/// A single branch is returned as-is; splitting only happens for two or
/// more consumers.
pub(crate) fn fan_out(
    mut consumers: Vec<Arc<dyn TelemetryConsumer>>,
) -> GraphResult<Arc<dyn TelemetryConsumer>> {
    match consumers.len() {
        0 => Err(GraphError::internal(
            "fan-out requires at least one downstream consumer",
        )),
        1 => Ok(consumers.swap_remove(0)),
        _ => Ok(Arc::new(FanoutConsumer::new(consumers))),
    }
}

/// Consumer forwarding each payload to every downstream branch in order
pub(crate) struct FanoutConsumer {
    branches: Vec<Branch>,
}

struct Branch {
    consumer: Arc<dyn TelemetryConsumer>,
    mutates: bool,
}

impl FanoutConsumer {
    fn new(consumers: Vec<Arc<dyn TelemetryConsumer>>) -> Self {
        let branches = consumers
            .into_iter()
            .map(|consumer| {
                let mutates = consumer.capabilities().mutates_data;
                Branch { consumer, mutates }
            })
            .collect();
        Self { branches }
    }
}

#[async_trait]
impl TelemetryConsumer for FanoutConsumer {
    fn capabilities(&self) -> ConsumerCapabilities {
        // Mutating branches get their own copy here, so producers may share.
        ConsumerCapabilities::default()
    }

    async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()> {
        let last = self.branches.len().saturating_sub(1);
        for (i, branch) in self.branches.iter().enumerate() {
            if branch.mutates {
                branch.consumer.consume(payload.deep_copy()).await?;
            } else if i == last {
                return branch.consumer.consume(payload).await;
            } else {
                branch.consumer.consume(payload.clone()).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TracesBatch;
    use std::sync::Mutex;

    struct Sink {
        mutates: bool,
        seen: Mutex<Vec<TelemetryPayload>>,
    }

    impl Sink {
        fn new(mutates: bool) -> Arc<Self> {
            Arc::new(Self {
                mutates,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TelemetryConsumer for Sink {
        fn capabilities(&self) -> ConsumerCapabilities {
            ConsumerCapabilities {
                mutates_data: self.mutates,
            }
        }

        async fn consume(&self, payload: TelemetryPayload) -> GraphResult<()> {
            self.seen.lock().unwrap().push(payload);
            Ok(())
        }
    }

    fn payload() -> TelemetryPayload {
        TelemetryPayload::Traces(TracesBatch::new(vec![]))
    }

    #[tokio::test]
    async fn test_single_branch_is_unwrapped() {
        let sink = Sink::new(false);
        let consumer = fan_out(vec![sink.clone()]).unwrap();

        let original = payload();
        consumer.consume(original.clone()).await.unwrap();

        let seen = sink.seen.lock().unwrap();
        assert!(seen[0].shares_records_with(&original));
    }

    #[tokio::test]
    async fn test_read_only_branches_share() {
        let a = Sink::new(false);
        let b = Sink::new(false);
        let consumer = fan_out(vec![a.clone(), b.clone()]).unwrap();

        let original = payload();
        consumer.consume(original.clone()).await.unwrap();

        assert!(a.seen.lock().unwrap()[0].shares_records_with(&original));
        assert!(b.seen.lock().unwrap()[0].shares_records_with(&original));
    }

    #[tokio::test]
    async fn test_mutating_branches_get_copies() {
        let mutating = Sink::new(true);
        let read_only = Sink::new(false);
        let consumer = fan_out(vec![mutating.clone(), read_only.clone()]).unwrap();

        let original = payload();
        consumer.consume(original.clone()).await.unwrap();

        let mutated_view = mutating.seen.lock().unwrap();
        let shared_view = read_only.seen.lock().unwrap();
        assert!(!mutated_view[0].shares_records_with(&original));
        assert!(shared_view[0].shares_records_with(&original));
        assert_eq!(mutated_view[0], shared_view[0]);
    }

    #[tokio::test]
    async fn test_all_mutating_branches_are_isolated() {
        let a = Sink::new(true);
        let b = Sink::new(true);
        let consumer = fan_out(vec![a.clone(), b.clone()]).unwrap();

        let original = payload();
        consumer.consume(original.clone()).await.unwrap();

        let seen_a = a.seen.lock().unwrap();
        let seen_b = b.seen.lock().unwrap();
        assert!(!seen_a[0].shares_records_with(&original));
        assert!(!seen_b[0].shares_records_with(&original));
        assert!(!seen_a[0].shares_records_with(&seen_b[0]));
    }

    #[tokio::test]
    async fn test_empty_fan_out_is_rejected() {
        assert!(fan_out(Vec::new()).is_err());
    }
}
