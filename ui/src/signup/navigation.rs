//! Navigation seam for the sign-up flow
//!
//! The page never talks to the router directly. It receives something that
//! implements [`Navigate`], which the `web` binary backs with the Dioxus router.

use dioxus::prelude::EventHandler;
use std::time::Duration;
use tracing::info;

use crate::utils::platform::sleep;

pub trait Navigate {
    fn navigate_to(&self, path: &str);
}

impl Navigate for EventHandler<String> {
    fn navigate_to(&self, path: &str) {
        self.call(path.to_string());
    }
}

/// Wait out `delay`, then navigate. Dropping the future before the delay
/// elapses cancels the navigation.
pub async fn redirect_after<N: Navigate + ?Sized>(navigator: &N, delay: Duration, path: &str) {
    sleep(delay).await;
    info!("Redirecting to {}", path);
    navigator.navigate_to(path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigate for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_redirect_fires_after_delay() {
        let navigator = RecordingNavigator::default();
        let start = tokio::time::Instant::now();

        redirect_after(&navigator, Duration::from_secs(2), "/Administrator").await;

        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(*navigator.visited.borrow(), vec!["/Administrator".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_redirect_never_navigates() {
        let navigator = RecordingNavigator::default();

        let result = tokio::time::timeout(
            Duration::from_millis(500),
            redirect_after(&navigator, Duration::from_secs(2), "/Administrator"),
        )
        .await;

        assert!(result.is_err());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(navigator.visited.borrow().is_empty());
    }
}
