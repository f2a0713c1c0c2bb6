//! UI shell state: which screen is showing, the score mirror, the leaderboard
//! query and the score submission.

use std::rc::Rc;
use yew::Reducible;

use crate::leaderboard::Score;
use crate::scene::SceneEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Running,
    Lost,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub phase: GamePhase,
    /// Last score reported by the scene.
    pub score: u32,
    /// Contents of the name field on the game-over screen.
    pub name: String,
    /// Set once the player pressed Submit for the current run.
    pub submitted: bool,
    pub leaderboard: Remote<Vec<Score>>,
    pub submit: SubmitStatus,
}

impl UiState {
    pub fn new(name: String) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            name,
            submitted: false,
            leaderboard: Remote::Loading,
            submit: SubmitStatus::Idle,
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.submit == SubmitStatus::Pending || self.submitted
    }

    pub fn show_submit_success(&self) -> bool {
        self.submitted && self.submit == SubmitStatus::Succeeded
    }

    pub fn show_submit_error(&self) -> bool {
        self.submitted && self.submit == SubmitStatus::Failed
    }
}

#[derive(Clone, Debug)]
pub enum UiAction {
    Scene(SceneEvent),
    StartClicked,
    RestartClicked,
    MainMenu,
    SetName(String),
    SubmitStarted,
    /// Carries the name to prefill for the next run (empty when it was blank).
    SubmitSucceeded(String),
    SubmitFailed,
    LeaderboardLoading,
    LeaderboardLoaded(Vec<Score>),
    LeaderboardFailed(String),
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use UiAction::*;
        let mut new = (*self).clone();
        match action {
            Scene(SceneEvent::ScoreUpdate(score)) => new.score = score,
            Scene(SceneEvent::GameLose) => new.phase = GamePhase::Lost,
            Scene(SceneEvent::GameStart) => new.phase = GamePhase::Running,
            StartClicked => {
                new.phase = GamePhase::Running;
                new.submitted = false;
            }
            RestartClicked => new.submitted = false,
            MainMenu => new.phase = GamePhase::Menu,
            SetName(name) => new.name = name,
            SubmitStarted => {
                new.submitted = true;
                new.submit = SubmitStatus::Pending;
            }
            SubmitSucceeded(remembered) => {
                new.name = remembered;
                new.submit = SubmitStatus::Succeeded;
            }
            SubmitFailed => new.submit = SubmitStatus::Failed,
            LeaderboardLoading => {
                // keep showing the old rows while a refetch is in flight
                if !matches!(new.leaderboard, Remote::Ready(_)) {
                    new.leaderboard = Remote::Loading;
                }
            }
            LeaderboardLoaded(rows) => new.leaderboard = Remote::Ready(rows),
            LeaderboardFailed(e) => new.leaderboard = Remote::Failed(e),
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: UiState, action: UiAction) -> UiState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn scene_events_drive_phase_and_score() {
        let s = UiState::new(String::new());
        assert_eq!(s.phase, GamePhase::Menu);
        let s = reduce(s, UiAction::Scene(SceneEvent::GameStart));
        assert_eq!(s.phase, GamePhase::Running);
        let s = reduce(s, UiAction::Scene(SceneEvent::ScoreUpdate(4)));
        assert_eq!(s.score, 4);
        let s = reduce(s, UiAction::Scene(SceneEvent::GameLose));
        assert_eq!(s.phase, GamePhase::Lost);
        assert_eq!(s.score, 4);
        let s = reduce(s, UiAction::MainMenu);
        assert_eq!(s.phase, GamePhase::Menu);
    }

    #[test]
    fn submit_flow_success() {
        let s = UiState::new("ada".into());
        let s = reduce(s, UiAction::SubmitStarted);
        assert!(s.submit_disabled());
        assert!(!s.show_submit_success());
        let s = reduce(s, UiAction::SubmitSucceeded("ada".into()));
        assert!(s.show_submit_success());
        assert!(s.submit_disabled());
    }

    #[test]
    fn submitted_name_is_prefilled_for_next_run() {
        let s = UiState::new(String::new());
        let s = reduce(s, UiAction::SetName("  ada ".into()));
        let s = reduce(s, UiAction::SubmitStarted);
        let s = reduce(s, UiAction::SubmitSucceeded("ada".into()));
        assert_eq!(s.name, "ada");
        let s = reduce(s, UiAction::RestartClicked);
        let s = reduce(s, UiAction::Scene(SceneEvent::GameLose));
        assert_eq!(s.name, "ada");
        assert!(!s.submit_disabled());

        let s = reduce(s, UiAction::SetName("   ".into()));
        let s = reduce(s, UiAction::SubmitStarted);
        let s = reduce(s, UiAction::SubmitSucceeded(String::new()));
        assert!(s.name.is_empty());
    }

    #[test]
    fn submit_failure_shows_error_until_restart() {
        let s = UiState::new(String::new());
        let s = reduce(s, UiAction::SubmitStarted);
        let s = reduce(s, UiAction::SubmitFailed);
        assert!(s.show_submit_error());
        let s = reduce(s, UiAction::RestartClicked);
        assert!(!s.show_submit_error());
        assert!(!s.submit_disabled());
    }

    #[test]
    fn start_clears_submitted() {
        let mut s = UiState::new(String::new());
        s.submitted = true;
        let s = reduce(s, UiAction::StartClicked);
        assert!(!s.submitted);
        assert_eq!(s.phase, GamePhase::Running);
    }

    #[test]
    fn refetch_keeps_existing_rows() {
        let rows = vec![Score { name: "ada".into(), score: 3 }];
        let s = reduce(UiState::new(String::new()), UiAction::LeaderboardLoaded(rows.clone()));
        let s = reduce(s, UiAction::LeaderboardLoading);
        assert_eq!(s.leaderboard, Remote::Ready(rows));
        let s = reduce(s, UiAction::LeaderboardFailed("down".into()));
        assert_eq!(s.leaderboard, Remote::Failed("down".into()));
    }
}
