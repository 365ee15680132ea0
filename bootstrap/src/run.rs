//! One bootstrap run: acquire, verify once, classify.

use miniapp_acquirer::{Acquirer, HostObject, PageLocation};
use miniapp_types::BootstrapOutcome;
use miniapp_verifier::{classify, InitDataVerifier, VerifierClient};
use tracing::Instrument;

use crate::tracing_spans::{bootstrap_run_span, verify_span};
use crate::BootstrapConfig;

/// Wires an acquirer to a verifier.
///
/// Holds no per-run state, so [`Bootstrap::run`] can be re-issued freely
/// (e.g. on a manual reload).
pub struct Bootstrap<H, V> {
    acquirer: Acquirer<H>,
    verifier: V,
}

impl<H: HostObject> Bootstrap<H, VerifierClient> {
    /// Build a bootstrap against the configured backend.
    pub fn from_config(host: H, config: &BootstrapConfig) -> Self {
        Self::new(
            Acquirer::new(host, config.acquirer_config()),
            config.verifier_client(),
        )
    }
}

impl<H, V> Bootstrap<H, V>
where
    H: HostObject,
    V: InitDataVerifier,
{
    pub fn new(acquirer: Acquirer<H>, verifier: V) -> Self {
        Self { acquirer, verifier }
    }

    pub fn acquirer(&self) -> &Acquirer<H> {
        &self.acquirer
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Run the handshake for the page at `location`.
    ///
    /// The first candidate found is the only one ever submitted; a rejection
    /// does not send the run back to later sources.
    pub async fn run(&self, location: &PageLocation) -> BootstrapOutcome {
        async {
            let Some(acquired) = self.acquirer.acquire(location).await else {
                tracing::info!(outcome = "not_found", "bootstrap run finished");
                return BootstrapOutcome::NotFound;
            };

            let span = verify_span(acquired.source.as_str(), acquired.candidate.len());
            let result = self
                .verifier
                .verify(&acquired.candidate)
                .instrument(span)
                .await;

            let outcome = classify(result);
            tracing::info!(outcome = outcome.as_str(), "bootstrap run finished");
            outcome
        }
        .instrument(bootstrap_run_span())
        .await
    }
}
