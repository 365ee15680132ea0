//! End-to-end bootstrap runs against nullable collaborators.

use std::time::Duration;

use miniapp_acquirer::{Acquirer, AcquirerConfig, PageLocation};
use miniapp_bootstrap::{Bootstrap, BootstrapOutcome};
use miniapp_nullables::{NullHost, NullVerifier};
use miniapp_types::AcquisitionSource;
use serde_json::json;
use tokio::time::Instant;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn bootstrap(host: NullHost, verifier: NullVerifier) -> Bootstrap<NullHost, NullVerifier> {
    Bootstrap::new(Acquirer::new(host, AcquirerConfig::default()), verifier)
}

fn ann() -> NullVerifier {
    NullVerifier::accepting(json!({"id": 42, "username": "ann"}))
}

/// A page URL where every URL source has a distinct candidate.
fn loaded_location() -> PageLocation {
    PageLocation::from_parts(
        "initData=from-query",
        "tgWebAppData=from-raw&initData=from-parsed",
    )
}

// ---------------------------------------------------------------------------
// Priority short-circuit
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn host_sync_skips_polling_and_url() {
    let run = bootstrap(NullHost::present("from-host"), ann());
    let outcome = run.run(&loaded_location()).await;

    assert!(outcome.is_verified());
    assert_eq!(run.acquirer().host().reads(), 1);
    assert_eq!(run.verifier().submitted()[0].as_str(), "from-host");
}

#[tokio::test(start_paused = true)]
async fn each_source_short_circuits_the_rest() {
    let cases = [
        (
            PageLocation::from_parts("initData=q", "tgWebAppData=r&initData=p"),
            AcquisitionSource::UrlQuery,
            "q",
        ),
        (
            PageLocation::from_parts("", "tgWebAppData=r&initData=p"),
            AcquisitionSource::UrlFragmentRaw,
            "r",
        ),
        (
            PageLocation::from_parts("", "initData=p"),
            AcquisitionSource::UrlFragmentParsed,
            "p",
        ),
    ];
    for (location, source, expected) in cases {
        let acquirer = Acquirer::new(NullHost::absent(), AcquirerConfig::default());
        let acquired = acquirer.acquire(&location).await.unwrap();
        assert_eq!(acquired.source, source);
        assert_eq!(acquired.candidate.as_str(), expected);
    }
}

#[tokio::test(start_paused = true)]
async fn late_host_beats_url_sources() {
    let host = NullHost::available_after(Duration::from_millis(450), "late-host");
    let run = bootstrap(host, ann());
    run.run(&loaded_location()).await;

    assert_eq!(run.verifier().submitted()[0].as_str(), "late-host");
}

#[tokio::test(start_paused = true)]
async fn polled_value_is_returned_on_next_tick() {
    let acquirer = Acquirer::new(
        NullHost::available_after(Duration::from_millis(250), "late-host"),
        AcquirerConfig::default(),
    );
    let start = Instant::now();
    let acquired = acquirer.acquire(&PageLocation::empty()).await.unwrap();

    assert_eq!(acquired.source, AcquisitionSource::HostObjectPolled);
    assert!(start.elapsed() >= Duration::from_millis(250));
    assert!(start.elapsed() <= Duration::from_millis(350));
    // one sync read, then polls at 100, 200, 300 ms
    assert_eq!(acquirer.host().reads(), 4);
}

#[tokio::test(start_paused = true)]
async fn failing_host_reads_are_swallowed() {
    let acquirer = Acquirer::new(NullHost::failing_for(3, "recovered"), AcquirerConfig::default());
    let acquired = acquirer.acquire(&PageLocation::empty()).await.unwrap();

    assert_eq!(acquired.source, AcquisitionSource::HostObjectPolled);
    assert_eq!(acquired.candidate.as_str(), "recovered");
}

#[tokio::test(start_paused = true)]
async fn poll_is_bounded_then_url_is_used() {
    let acquirer = Acquirer::new(NullHost::absent(), AcquirerConfig::default());
    let start = Instant::now();
    let acquired = acquirer.acquire(&loaded_location()).await.unwrap();

    assert_eq!(acquired.source, AcquisitionSource::UrlQuery);
    assert!(start.elapsed() >= Duration::from_millis(2000));
    assert!(start.elapsed() <= Duration::from_millis(2100));
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn nothing_anywhere_is_not_found_without_a_request() {
    let run = bootstrap(NullHost::absent(), ann());
    let outcome = run.run(&PageLocation::empty()).await;

    assert_eq!(outcome, BootstrapOutcome::NotFound);
    assert!(run.verifier().submitted().is_empty());
}

#[tokio::test(start_paused = true)]
async fn rejection_does_not_fall_back_to_later_sources() {
    let run = bootstrap(NullHost::present("forged"), NullVerifier::rejecting());
    let outcome = run.run(&loaded_location()).await;

    match outcome {
        BootstrapOutcome::Rejected(result) => {
            assert_eq!(result.status, 400);
            assert_eq!(result.body["detail"], "init_data invalid");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(run.verifier().submitted().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn transport_failure_is_a_rejected_outcome() {
    let run = bootstrap(NullHost::present("a=1"), NullVerifier::unreachable());
    let outcome = run.run(&PageLocation::empty()).await;

    assert!(matches!(outcome, BootstrapOutcome::Rejected(r) if r.status == 0 && !r.ok));
}

#[tokio::test(start_paused = true)]
async fn verified_outcome_carries_user() {
    let run = bootstrap(NullHost::present("a=1"), ann());
    match run.run(&PageLocation::empty()).await {
        BootstrapOutcome::Verified(identity) => {
            assert_eq!(identity.user.id().as_deref(), Some("42"));
            assert_eq!(identity.user.username(), Some("ann"));
        }
        other => panic!("expected Verified, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn runs_are_repeatable() {
    let run = bootstrap(NullHost::present("a=1"), ann());
    let first = run.run(&PageLocation::empty()).await;
    let second = run.run(&PageLocation::empty()).await;

    assert_eq!(first, second);
    assert_eq!(run.verifier().submitted().len(), 2);
}
