//! The command/event surface between the engine and whatever renders it.
//!
//! The engine never touches the terminal; every operation returns a list of
//! `Command`s for the presenter to apply, and the presenter reports finished
//! door animations back through `Engine::animation_complete`.

/// Physical screen side of an answer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Visual state of a door frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Neutral,
    Solved,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Info,
    Success,
    Error,
}

/// What the next-button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextMode {
    /// Level in progress, button disabled.
    Level,
    /// Level cleared, advances to the next level.
    LevelReady,
    /// Final level cleared, shows the summary.
    Final,
    /// Summary shown, restarts the run.
    Restart,
}

/// Identifies one issued door animation. The sequence number is bumped every
/// time a new animation starts on that door, so a completion report from a
/// superseded animation can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationToken {
    pub door: usize,
    pub seq: u32,
}

/// Partial HUD update; `None` fields leave the presenter's state untouched.
#[derive(Debug, Clone, Default)]
pub struct HudUpdate {
    pub progress: Option<String>,
    pub score: Option<String>,
    pub question_title: Option<String>,
    pub question_detail: Option<String>,
    pub left_option: Option<String>,
    pub right_option: Option<String>,
    pub feedback: Option<(String, FeedbackKind)>,
    pub next_button: Option<NextButton>,
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone)]
pub struct NextButton {
    pub enabled: bool,
    pub label: String,
    pub mode: NextMode,
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub visible: bool,
    pub text: String,
}

#[derive(Debug, Clone)]
pub enum Command {
    ResetDoorVisual {
        door: usize,
    },
    SetDoorLabel {
        door: usize,
        side: Side,
        text: String,
    },
    SetDoorHighlight {
        door: usize,
        highlight: Highlight,
    },
    /// Rotate the door toward `target_angle` (radians) at `speed` (radians
    /// per second). The presenter must hand `token` back once the door
    /// reaches the target.
    AnimateDoorRotation {
        door: usize,
        target_angle: f32,
        speed: f32,
        token: AnimationToken,
    },
    FocusCamera {
        door: usize,
    },
    UpdateHud(HudUpdate),
}
