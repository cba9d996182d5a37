//! Ties in-flight requests to the component that issued them.

use std::{cell::Cell, future::Future, rc::Rc};

use dioxus::prelude::*;

/// Cancelled when the owning component unmounts.
///
/// Results that arrive afterwards are dropped by [`LifetimeToken::guard`], so
/// a late response never writes into state that no longer exists.
#[derive(Clone, Debug, Default)]
pub struct LifetimeToken {
    cancelled: Rc<Cell<bool>>,
}

impl LifetimeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Awaits `future`, discarding its output if the token was cancelled in
    /// the meantime.
    pub async fn guard<F: Future>(&self, future: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }

        let output = future.await;

        (!self.is_cancelled()).then_some(output)
    }
}

/// A token cancelled when the calling component is dropped.
pub fn use_lifetime_token() -> LifetimeToken {
    let token = use_hook(LifetimeToken::new);

    use_drop({
        let token = token.clone();
        move || token.cancel()
    });

    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_result_while_alive() {
        let token = LifetimeToken::new();

        assert_eq!(token.guard(async { 5 }).await, Some(5));
    }

    #[tokio::test]
    async fn drops_result_after_cancel() {
        let token = LifetimeToken::new();
        let teardown = token.clone();

        let result = token
            .guard(async move {
                teardown.cancel();
                5
            })
            .await;

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn skips_work_once_cancelled() {
        let token = LifetimeToken::new();
        token.cancel();
        let polled = Cell::new(false);

        let result = token.guard(async { polled.set(true) }).await;

        assert_eq!(result, None);
        assert!(!polled.get());
    }
}
