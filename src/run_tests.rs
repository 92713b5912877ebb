//! Tests for the execution loop's change handling.

use super::{RunError, handle_change};
use ipbot::monitor::IpChange;
use ipbot::network::FetchError;
use ipbot::notify::{ChangeNotifier, NotifyError};
use ipbot::transport::HttpError;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::SystemTime;

/// Mock notifier recording the changes it was asked to announce.
struct MockNotifier {
    calls: AtomicUsize,
    announced: Mutex<Vec<IpChange>>,
    fail: bool,
}

impl MockNotifier {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            announced: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChangeNotifier for MockNotifier {
    async fn notify(&self, change: &IpChange) -> Result<(), NotifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.announced.lock().unwrap().push(change.clone());

        if self.fail {
            Err(NotifyError::Http(HttpError::Timeout))
        } else {
            Ok(())
        }
    }
}

fn change(previous: &str, current: &str) -> IpChange {
    IpChange::new(
        previous.parse().unwrap(),
        current.parse().unwrap(),
        SystemTime::UNIX_EPOCH,
    )
}

#[tokio::test]
async fn notifies_on_change() {
    let notifier = MockNotifier::new();

    handle_change(&change("1.2.3.4", "1.2.3.5"), &notifier, false).await;

    assert_eq!(notifier.calls(), 1);
    let announced = notifier.announced.lock().unwrap();
    assert_eq!(announced[0].current.as_str(), "1.2.3.5");
}

#[tokio::test]
async fn dry_run_skips_notification() {
    let notifier = MockNotifier::new();

    handle_change(&change("1.2.3.4", "1.2.3.5"), &notifier, true).await;

    assert_eq!(notifier.calls(), 0);
}

#[tokio::test]
async fn delivery_failure_is_absorbed() {
    let notifier = MockNotifier::failing();

    // Must not panic or propagate; delivery is fire-and-forget.
    handle_change(&change("1.2.3.4", "1.2.3.5"), &notifier, false).await;

    assert_eq!(notifier.calls(), 1);
}

#[test]
fn startup_fetch_error_mentions_startup() {
    let err = RunError::StartupFetch(FetchError::Http(HttpError::Timeout));

    assert!(err.to_string().contains("at startup"));
}
