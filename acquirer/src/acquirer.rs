//! Ordered, short-circuiting search for an init-data candidate.

use std::time::Duration;

use miniapp_types::{AcquisitionSource, InitDataCandidate};
use tracing::Instrument;

use crate::decode::{decode_once, raw_fragment_value, FRAGMENT_DATA_KEY};
use crate::host::HostObject;
use crate::location::PageLocation;
use crate::poll::poll_until;

/// Parameter names accepted for init data in the query and the parsed
/// fragment, highest priority first.
pub const INIT_DATA_ALIASES: [&str; 3] = ["initData", "tgWebAppInitData", "init_data"];

/// Default wait between host object polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default bound on host object polling.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(2000);

/// Tuning for one acquirer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcquirerConfig {
    pub poll_interval: Duration,
    pub poll_timeout: Duration,
    /// Whether the unsigned query-string path is consulted at all.
    pub enable_url_query: bool,
}

impl Default for AcquirerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            enable_url_query: true,
        }
    }
}

/// A committed candidate and where it was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acquired {
    pub candidate: InitDataCandidate,
    pub source: AcquisitionSource,
}

/// Searches the host object and the page URL for init data.
pub struct Acquirer<H> {
    host: H,
    config: AcquirerConfig,
}

impl<H: HostObject> Acquirer<H> {
    pub fn new(host: H, config: AcquirerConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &AcquirerConfig {
        &self.config
    }

    /// Try every source in [`AcquisitionSource::ORDER`] and stop at the first
    /// non-empty candidate. `None` means no source had one.
    pub async fn acquire(&self, location: &PageLocation) -> Option<Acquired> {
        for source in AcquisitionSource::ORDER {
            let span = tracing::debug_span!("acquire_source", source = %source);
            if let Some(candidate) = self.probe(source, location).instrument(span).await {
                tracing::info!(%source, len = candidate.len(), "init data acquired");
                return Some(Acquired { candidate, source });
            }
        }
        tracing::info!("no init data in host object or page URL");
        None
    }

    /// Consult a single source.
    pub async fn probe(
        &self,
        source: AcquisitionSource,
        location: &PageLocation,
    ) -> Option<InitDataCandidate> {
        match source {
            AcquisitionSource::HostObjectSync => self.read_host(),
            AcquisitionSource::HostObjectPolled => {
                poll_until(self.config.poll_interval, self.config.poll_timeout, || {
                    self.read_host()
                })
                .await
            }
            AcquisitionSource::UrlQuery => {
                if !self.config.enable_url_query {
                    tracing::debug!("url query source disabled");
                    return None;
                }
                let candidate = location
                    .query_param(&INIT_DATA_ALIASES)
                    .and_then(InitDataCandidate::non_empty);
                if candidate.is_some() {
                    tracing::warn!("using init data from the URL query, intended for local demos only");
                }
                candidate
            }
            AcquisitionSource::UrlFragmentRaw => {
                let raw = raw_fragment_value(location.fragment(), FRAGMENT_DATA_KEY)?;
                let value = decode_once(raw).unwrap_or_else(|| {
                    tracing::debug!("fragment init data is not decodable, keeping raw value");
                    raw.to_string()
                });
                InitDataCandidate::non_empty(value)
            }
            AcquisitionSource::UrlFragmentParsed => location
                .fragment_param(&INIT_DATA_ALIASES)
                .and_then(InitDataCandidate::non_empty),
        }
    }

    /// Read the host field once; errors and empty values are "no candidate".
    fn read_host(&self) -> Option<InitDataCandidate> {
        match self.host.read_init_data() {
            Ok(value) => value.and_then(InitDataCandidate::non_empty),
            Err(e) => {
                tracing::trace!("host object read failed: {e}");
                None
            }
        }
    }
}
