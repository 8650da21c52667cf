//! Search orchestration and UI state.
//!
//! One logical search at a time: state is reset on every submission, the
//! agent and player namespaces are queried concurrently, and the pair is
//! treated as failed if either call fails. There is no cancellation and
//! no staleness guard across overlapping searches; the last search to
//! complete wins.

use crate::bridge::UserDirectory;
use crate::notification::{Notice, Notifier};
use crate::types::{AccountKind, UserResponse};

/// UI state for the lookup session. Reset at the start of every search.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub is_loading: bool,
    pub agent_data: Option<UserResponse>,
    pub player_data: Option<UserResponse>,
    pub show_duplicate_warning: bool,
    pub warning_acknowledged: bool,
    pub show_results: bool,
}

impl SearchState {
    fn reset(&mut self) {
        *self = SearchState::default();
    }

    pub fn has_agent_account(&self) -> bool {
        self.agent_data.as_ref().is_some_and(|r| r.account_exists())
    }

    pub fn has_player_account(&self) -> bool {
        self.player_data
            .as_ref()
            .is_some_and(|r| r.account_exists())
    }

    /// The duplicate-account case flagged to the operator as an
    /// anti-fraud caution.
    pub fn has_both_accounts(&self) -> bool {
        self.has_agent_account() && self.has_player_account()
    }
}

/// Owns the search state and drives lookups against a [`UserDirectory`].
pub struct SearchSession<D> {
    directory: D,
    notifier: Box<dyn Notifier>,
    state: SearchState,
}

impl<D: UserDirectory> SearchSession<D> {
    pub fn new(directory: D, notifier: Box<dyn Notifier>) -> Self {
        Self {
            directory,
            notifier,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Run one search for `username` (expected non-empty and trimmed).
    ///
    /// Both namespaces are queried concurrently and both calls are
    /// awaited before any state transition. When both accounts exist the
    /// results are gated behind the duplicate-account warning; otherwise
    /// they are shown directly (the no-match rendering is deferred to
    /// the view layer). A failure of either call leaves the cleared
    /// state and emits exactly one error notice.
    pub async fn handle_search(&mut self, username: &str) {
        self.state.reset();
        self.state.is_loading = true;

        let (agent, player) = tokio::join!(
            self.directory.fetch_user_data(username, AccountKind::Agent),
            self.directory.fetch_user_data(username, AccountKind::Player),
        );

        match (agent, player) {
            (Ok(agent), Ok(player)) => {
                let both = agent.account_exists() && player.account_exists();
                self.state.agent_data = Some(agent);
                self.state.player_data = Some(player);
                if both {
                    self.state.show_duplicate_warning = true;
                } else {
                    self.state.show_results = true;
                }
            }
            (agent, player) => {
                for err in [agent.err(), player.err()].into_iter().flatten() {
                    log::warn!("Lookup for {:?} failed: {}", username, err);
                }
                self.notifier.notify(Notice::fetch_failed());
            }
        }

        self.state.is_loading = false;
    }

    /// The acknowledgment checkbox in the duplicate-account dialog.
    pub fn set_warning_acknowledged(&mut self, acknowledged: bool) {
        self.state.warning_acknowledged = acknowledged;
    }

    /// Confirm the duplicate-account warning. This is the only path out
    /// of the warning-gated state. Returns whether the dialog was
    /// dismissed; with the box unchecked a validation notice is emitted
    /// and no state changes.
    pub fn acknowledge_warning(&mut self) -> bool {
        if !self.state.warning_acknowledged {
            self.notifier.notify(Notice::acknowledgment_required());
            return false;
        }
        self.state.show_duplicate_warning = false;
        self.state.show_results = true;
        true
    }
}
