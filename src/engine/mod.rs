//! Door progression state machine.
//!
//! Owns the whole session: current level, per-door question assignment and
//! answer layout, score, and the lock that serializes answer submission
//! against in-flight door animations. Pure logic; rendering happens in
//! whatever applies the returned [`Command`]s.

pub mod commands;
pub mod layout;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::quiz::{Campaign, Question};
use commands::{
    AnimationToken, Command, FeedbackKind, Highlight, HudUpdate, NextButton, NextMode, Side,
    Summary,
};
use layout::{randomize_layout, AnswerLayout};

use std::f32::consts::PI;

/// Swing angle of a fully opened door.
pub const OPEN_ANGLE: f32 = PI / 1.6;
/// Partial swing used for the wrong-answer shake.
pub const SHAKE_ANGLE: f32 = PI / 6.0;
pub const CLOSED_ANGLE: f32 = 0.0;

const OPEN_SPEED: f32 = 2.4;
const SHAKE_SPEED: f32 = 3.2;
const RESET_SPEED: f32 = 4.0;

/// One choice-gate in the current level.
#[derive(Debug, Clone)]
pub struct Door {
    pub index: usize,
    pub solved: bool,
    /// Index into the current level's question list. Rotates forward on
    /// every wrong answer.
    pub question_ref: usize,
    pub layout: AnswerLayout,
}

/// Deferred transition waiting on an animation completion report.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// Door-open swing after a correct answer.
    Open { door: usize },
    /// First half of the wrong-answer sequence.
    Shake { door: usize },
    /// Second half: swing back shut, then rotate in a new question.
    Reset { door: usize },
}

pub struct Engine {
    campaign: Campaign,
    current_level: usize,
    score: u32,
    doors: Vec<Door>,
    locked: bool,
    summary: bool,
    awaiting_door: Option<usize>,
    current_door: usize,
    next_mode: NextMode,
    next_enabled: bool,
    pending: Option<Pending>,
    door_seq: Vec<u32>,
    rng: Pcg32,
}

impl Engine {
    /// The engine is inert until [`Engine::start`] loads level 0.
    pub fn new(campaign: Campaign, seed: u64) -> Self {
        let doors_per_level = campaign.doors_per_level();
        Engine {
            campaign,
            current_level: 0,
            score: 0,
            doors: Vec::new(),
            locked: false,
            summary: false,
            awaiting_door: None,
            current_door: 0,
            next_mode: NextMode::Level,
            next_enabled: false,
            pending: None,
            door_seq: vec![0; doors_per_level],
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn start(&mut self) -> Vec<Command> {
        self.load_level(0)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn current_door(&self) -> usize {
        self.current_door
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn in_summary(&self) -> bool {
        self.summary
    }

    pub fn awaiting_door(&self) -> Option<usize> {
        self.awaiting_door
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn level_complete(&self) -> bool {
        !self.doors.is_empty() && self.doors.iter().all(|d| d.solved)
    }

    /// Reset every door for `level_index`: door `i` gets question `i` and a
    /// fresh layout. Clears the lock, the awaiting slot and any pending
    /// animation outcome.
    pub fn load_level(&mut self, level_index: usize) -> Vec<Command> {
        self.current_level = level_index;
        self.awaiting_door = None;
        self.locked = false;
        self.summary = false;
        self.pending = None;
        self.current_door = 0;
        self.next_mode = NextMode::Level;
        self.next_enabled = false;

        let level = self.campaign.level(level_index);
        let rng = &mut self.rng;
        self.doors = level
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| Door {
                index: i,
                solved: false,
                question_ref: i,
                layout: randomize_layout(rng, q.correct),
            })
            .collect();

        let mut cmds = Vec::new();
        for i in 0..self.doors.len() {
            cmds.push(Command::ResetDoorVisual { door: i });
            cmds.push(Command::SetDoorHighlight { door: i, highlight: Highlight::Neutral });
            cmds.extend(self.label_commands(i));
        }
        cmds.push(Command::UpdateHud(HudUpdate {
            progress: Some(self.progress_text()),
            score: Some(self.score_text()),
            question_title: Some("Approach the first door".into()),
            question_detail: Some("Answer the question on each door to move forward.".into()),
            left_option: Some("Option A".into()),
            right_option: Some("Option B".into()),
            feedback: Some((
                "Press Enter to read the first door's question.".into(),
                FeedbackKind::Info,
            )),
            next_button: Some(NextButton {
                enabled: false,
                label: "Next level".into(),
                mode: NextMode::Level,
            }),
            summary: Some(Summary { visible: false, text: String::new() }),
        }));
        cmds
    }

    /// User intent to view a door's question. Doors must be taken strictly
    /// in order; anything else is feedback only.
    pub fn select_door(&mut self, door: usize) -> Vec<Command> {
        if self.locked || self.summary || door >= self.doors.len() {
            return Vec::new();
        }
        if door != self.current_door {
            return vec![self.feedback_only(
                format!("Answer door {} first.", self.current_door + 1),
                FeedbackKind::Info,
            )];
        }
        if self.doors[door].solved {
            return vec![
                self.feedback_only("That door is already solved.".into(), FeedbackKind::Info)
            ];
        }
        self.surface_question(door, Some(("Choose an option: left or right.".into(), FeedbackKind::Info)))
    }

    /// HUD option click: resolve the screen side through the awaiting door's
    /// layout into an original choice index.
    pub fn submit_side(&mut self, side: Side) -> Vec<Command> {
        if self.locked || self.summary || self.doors.is_empty() {
            return Vec::new();
        }
        let door = self.awaiting_door.unwrap_or(self.current_door);
        self.awaiting_door = Some(door);
        let choice = self.doors[door].layout.choice_for(side);
        self.submit_answer(Some(door), choice)
    }

    /// Door-panel pick from the scene. A pick with a resolved side answers;
    /// a plain panel pick only selects.
    pub fn door_picked(&mut self, door: usize, side: Option<Side>) -> Vec<Command> {
        if self.locked || self.summary || door >= self.doors.len() {
            return Vec::new();
        }
        match side {
            Some(side) => {
                if door != self.current_door {
                    return vec![self.feedback_only(
                        format!("Answer door {} first.", self.current_door + 1),
                        FeedbackKind::Info,
                    )];
                }
                let choice = self.doors[door].layout.choice_for(side);
                self.submit_answer(Some(door), choice)
            }
            None => self.select_door(door),
        }
    }

    /// Judge `choice` against the original correct index of the door's
    /// currently assigned question, then lock and hand the outcome to the
    /// animation pipeline. `None` defaults to the current door.
    pub fn submit_answer(&mut self, door: Option<usize>, choice: u8) -> Vec<Command> {
        if self.locked || self.summary || self.doors.is_empty() {
            return Vec::new();
        }
        let door = door.unwrap_or(self.current_door);
        if door != self.current_door {
            return vec![self.feedback_only(
                format!("Answer door {} first.", self.current_door + 1),
                FeedbackKind::Info,
            )];
        }

        let correct = self.current_question(door).correct == choice;
        self.locked = true;
        let mut cmds = Vec::new();
        if correct {
            self.score += 1;
            self.pending = Some(Pending::Open { door });
            cmds.push(self.animate(door, OPEN_ANGLE, OPEN_SPEED));
        } else {
            self.score = self.score.saturating_sub(1);
            self.pending = Some(Pending::Shake { door });
            cmds.push(Command::SetDoorHighlight { door, highlight: Highlight::Wrong });
            cmds.push(self.animate(door, SHAKE_ANGLE, SHAKE_SPEED));
        }
        cmds.push(Command::UpdateHud(HudUpdate {
            score: Some(self.score_text()),
            ..Default::default()
        }));
        cmds
    }

    /// Presenter reports a finished door rotation. Completions from
    /// superseded animations carry a stale sequence number and are dropped.
    pub fn animation_complete(&mut self, token: AnimationToken) -> Vec<Command> {
        if token.door >= self.door_seq.len() || token.seq != self.door_seq[token.door] {
            return Vec::new();
        }
        let Some(pending) = self.pending.take() else {
            return Vec::new();
        };
        match pending {
            Pending::Open { door } if door == token.door => self.finish_open(door),
            Pending::Shake { door } if door == token.door => {
                self.pending = Some(Pending::Reset { door });
                vec![self.animate(door, CLOSED_ANGLE, RESET_SPEED)]
            }
            Pending::Reset { door } if door == token.door => self.finish_reset(door),
            other => {
                // Completion for some other door; keep waiting.
                self.pending = Some(other);
                Vec::new()
            }
        }
    }

    /// Valid only when the current level is cleared and another one follows.
    pub fn advance_level(&mut self) -> Vec<Command> {
        if !self.level_complete() || self.current_level + 1 >= self.campaign.level_count() {
            return Vec::new();
        }
        self.load_level(self.current_level + 1)
    }

    /// Valid only when the final level is cleared; enters the terminal
    /// summary state.
    pub fn finish(&mut self) -> Vec<Command> {
        if self.summary
            || !self.level_complete()
            || self.current_level + 1 != self.campaign.level_count()
        {
            return Vec::new();
        }
        self.summary = true;
        self.next_mode = NextMode::Restart;
        self.next_enabled = true;
        vec![Command::UpdateHud(HudUpdate {
            next_button: Some(NextButton {
                enabled: true,
                label: "Play again".into(),
                mode: NextMode::Restart,
            }),
            feedback: Some((
                "Challenge complete. Explore the open resources to go further.".into(),
                FeedbackKind::Success,
            )),
            summary: Some(Summary {
                visible: true,
                text: format!(
                    "You scored {} / {}. A perfect run opens every door first try.",
                    self.score,
                    self.campaign.total_questions()
                ),
            }),
            ..Default::default()
        })]
    }

    /// Back to level 0 with a zeroed score.
    pub fn restart(&mut self) -> Vec<Command> {
        self.score = 0;
        self.load_level(0)
    }

    /// Next-button activation; what it does depends on the advertised mode.
    pub fn next_clicked(&mut self) -> Vec<Command> {
        if self.locked || !self.next_enabled {
            return Vec::new();
        }
        match self.next_mode {
            NextMode::Level => Vec::new(),
            NextMode::LevelReady => self.advance_level(),
            NextMode::Final => self.finish(),
            NextMode::Restart => self.restart(),
        }
    }

    fn finish_open(&mut self, door: usize) -> Vec<Command> {
        self.doors[door].solved = true;
        self.current_door = (self.current_door + 1).min(self.doors.len() - 1);
        let explanation = self.current_question(door).explanation.clone();
        self.locked = false;
        self.awaiting_door = None;

        let mut cmds = Vec::new();
        for d in &self.doors {
            cmds.push(Command::SetDoorHighlight {
                door: d.index,
                highlight: if d.solved { Highlight::Solved } else { Highlight::Neutral },
            });
        }
        cmds.push(Command::FocusCamera { door: self.current_door });

        if self.level_complete() {
            let final_level = self.current_level + 1 == self.campaign.level_count();
            let (label, mode) = if final_level {
                ("See the final result", NextMode::Final)
            } else {
                ("Go to the next level", NextMode::LevelReady)
            };
            self.next_mode = mode;
            self.next_enabled = true;
            cmds.push(Command::UpdateHud(HudUpdate {
                score: Some(self.score_text()),
                feedback: Some((
                    format!("Level cleared. Score {}", self.score),
                    FeedbackKind::Success,
                )),
                next_button: Some(NextButton { enabled: true, label: label.into(), mode }),
                ..Default::default()
            }));
        } else {
            cmds.push(Command::UpdateHud(HudUpdate {
                score: Some(self.score_text()),
                feedback: Some((format!("Correct! {explanation}"), FeedbackKind::Success)),
                ..Default::default()
            }));
            cmds.extend(self.surface_question(self.current_door, None));
        }
        cmds
    }

    fn finish_reset(&mut self, door: usize) -> Vec<Command> {
        let doors_per_level = self.doors.len();
        let next_ref = (self.doors[door].question_ref + 1) % doors_per_level;
        let correct = self.campaign.level(self.current_level).questions[next_ref].correct;
        let new_layout = randomize_layout(&mut self.rng, correct);
        {
            let d = &mut self.doors[door];
            d.question_ref = next_ref;
            d.layout = new_layout;
        }
        self.locked = false;

        let mut cmds = vec![Command::SetDoorHighlight { door, highlight: Highlight::Neutral }];
        cmds.extend(self.surface_question(
            door,
            Some((
                "Wrong answer. A new question is on the door — try again.".into(),
                FeedbackKind::Error,
            )),
        ));
        cmds
    }

    /// Show `door`'s current question on the HUD and its door labels, and
    /// mark it as the one awaiting an answer.
    fn surface_question(
        &mut self,
        door: usize,
        feedback: Option<(String, FeedbackKind)>,
    ) -> Vec<Command> {
        self.awaiting_door = Some(door);
        let d = &self.doors[door];
        let q = self.question_at(d.question_ref);
        let hud = HudUpdate {
            question_title: Some(q.title.clone()),
            question_detail: Some(q.detail.clone()),
            left_option: Some(q.choices[d.layout.left as usize].clone()),
            right_option: Some(q.choices[d.layout.right as usize].clone()),
            feedback,
            ..Default::default()
        };
        let mut cmds = self.label_commands(door);
        cmds.push(Command::UpdateHud(hud));
        cmds
    }

    fn label_commands(&self, door: usize) -> Vec<Command> {
        let d = &self.doors[door];
        let q = self.question_at(d.question_ref);
        vec![
            Command::SetDoorLabel {
                door,
                side: Side::Left,
                text: q.choices[d.layout.left as usize].clone(),
            },
            Command::SetDoorLabel {
                door,
                side: Side::Right,
                text: q.choices[d.layout.right as usize].clone(),
            },
        ]
    }

    fn animate(&mut self, door: usize, target_angle: f32, speed: f32) -> Command {
        self.door_seq[door] += 1;
        Command::AnimateDoorRotation {
            door,
            target_angle,
            speed,
            token: AnimationToken { door, seq: self.door_seq[door] },
        }
    }

    fn current_question(&self, door: usize) -> &Question {
        self.question_at(self.doors[door].question_ref)
    }

    fn question_at(&self, question_ref: usize) -> &Question {
        &self.campaign.level(self.current_level).questions[question_ref]
    }

    fn feedback_only(&self, text: String, kind: FeedbackKind) -> Command {
        Command::UpdateHud(HudUpdate { feedback: Some((text, kind)), ..Default::default() })
    }

    fn progress_text(&self) -> String {
        format!(
            "Level {} / {}: {}",
            self.current_level + 1,
            self.campaign.level_count(),
            self.campaign.level(self.current_level).title
        )
    }

    fn score_text(&self) -> String {
        format!("Score {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Campaign, Level, Question};

    fn question(n: usize, correct: u8) -> Question {
        Question {
            title: format!("q{n}"),
            detail: format!("detail {n}"),
            choices: [format!("choice {n}a"), format!("choice {n}b")],
            correct,
            explanation: format!("because {n}"),
        }
    }

    fn campaign(levels: usize, doors: usize) -> Campaign {
        let levels = (0..levels)
            .map(|l| Level {
                title: format!("level {l}"),
                questions: (0..doors).map(|i| question(l * doors + i, (i % 2) as u8)).collect(),
            })
            .collect();
        Campaign::new(levels).unwrap()
    }

    fn engine(levels: usize, doors: usize) -> Engine {
        let mut engine = Engine::new(campaign(levels, doors), 1);
        engine.start();
        engine
    }

    fn tokens(cmds: &[Command]) -> Vec<AnimationToken> {
        cmds.iter()
            .filter_map(|c| match c {
                Command::AnimateDoorRotation { token, .. } => Some(*token),
                _ => None,
            })
            .collect()
    }

    fn correct_choice(engine: &Engine, door: usize) -> u8 {
        engine.current_question(door).correct
    }

    /// Answer the current door correctly and drive its animation to the end.
    fn solve_current(engine: &mut Engine) {
        let door = engine.current_door();
        let choice = correct_choice(engine, door);
        let cmds = engine.submit_answer(Some(door), choice);
        let t = tokens(&cmds);
        assert_eq!(t.len(), 1);
        engine.animation_complete(t[0]);
    }

    #[test]
    fn test_load_level_assigns_questions_in_order() {
        let engine = engine(3, 3);
        for (i, door) in engine.doors().iter().enumerate() {
            assert_eq!(door.question_ref, i);
            assert!(!door.solved);
            assert!(door.layout.is_permutation());
        }
        assert_eq!(engine.current_door(), 0);
        assert!(!engine.locked());
    }

    #[test]
    fn test_correct_answer_scores_and_advances_after_animation() {
        let mut engine = engine(1, 3);
        let choice = correct_choice(&engine, 0);
        let cmds = engine.submit_answer(Some(0), choice);
        assert!(engine.locked());
        assert_eq!(engine.score(), 1);
        // Door not solved until the open animation reports back
        assert!(!engine.doors()[0].solved);
        assert_eq!(engine.current_door(), 0);

        engine.animation_complete(tokens(&cmds)[0]);
        assert!(engine.doors()[0].solved);
        assert_eq!(engine.current_door(), 1);
        assert!(!engine.locked());
        assert_eq!(engine.awaiting_door(), Some(1));
    }

    #[test]
    fn test_wrong_answer_cycles_question_and_keeps_door() {
        let mut engine = engine(1, 3);
        let wrong = 1 - correct_choice(&engine, 0);
        let cmds = engine.submit_answer(Some(0), wrong);
        assert!(engine.locked());
        assert_eq!(engine.score(), 0); // clamped at zero

        // Shake completes, reset animation is issued, still locked
        let reset = engine.animation_complete(tokens(&cmds)[0]);
        let reset_tokens = tokens(&reset);
        assert_eq!(reset_tokens.len(), 1);
        assert!(engine.locked());
        assert_eq!(engine.doors()[0].question_ref, 0);

        // Reset completes: new question on the same door, unlocked
        engine.animation_complete(reset_tokens[0]);
        assert!(!engine.locked());
        assert_eq!(engine.doors()[0].question_ref, 1);
        assert!(!engine.doors()[0].solved);
        assert_eq!(engine.current_door(), 0);
        assert_eq!(engine.awaiting_door(), Some(0));
    }

    #[test]
    fn test_question_cycling_wraps_around() {
        let mut engine = engine(1, 2);
        for expected_ref in [1, 0, 1] {
            let wrong = 1 - correct_choice(&engine, 0);
            let cmds = engine.submit_answer(Some(0), wrong);
            let reset = engine.animation_complete(tokens(&cmds)[0]);
            engine.animation_complete(tokens(&reset)[0]);
            assert_eq!(engine.doors()[0].question_ref, expected_ref);
        }
    }

    #[test]
    fn test_wrong_then_right_scenario() {
        let mut engine = engine(1, 3);
        // Wrong on door 0: score stays clamped at 0, question rotates to 1
        let wrong = 1 - correct_choice(&engine, 0);
        let cmds = engine.submit_answer(Some(0), wrong);
        assert_eq!(engine.score(), 0);
        let reset = engine.animation_complete(tokens(&cmds)[0]);
        engine.animation_complete(tokens(&reset)[0]);
        assert_eq!(engine.doors()[0].question_ref, 1);
        assert_eq!(engine.current_door(), 0);

        // Right on the rotated question: score 1, door advances
        solve_current(&mut engine);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.current_door(), 1);
    }

    #[test]
    fn test_out_of_order_submission_mutates_nothing() {
        let mut engine = engine(1, 3);
        let cmds = engine.submit_answer(Some(2), 0);
        assert_eq!(engine.score(), 0);
        assert!(!engine.locked());
        assert_eq!(engine.current_door(), 0);
        assert!(engine.doors().iter().all(|d| !d.solved));
        // Feedback only, no animation
        assert!(tokens(&cmds).is_empty());
        assert!(matches!(cmds.as_slice(), [Command::UpdateHud(_)]));
    }

    #[test]
    fn test_input_dropped_while_locked() {
        let mut engine = engine(1, 3);
        let choice = correct_choice(&engine, 0);
        engine.submit_answer(Some(0), choice);
        assert!(engine.locked());
        assert!(engine.submit_answer(Some(0), choice).is_empty());
        assert!(engine.select_door(0).is_empty());
        assert!(engine.submit_side(Side::Left).is_empty());
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn test_stale_animation_token_is_ignored() {
        let mut engine = engine(1, 3);
        let wrong = 1 - correct_choice(&engine, 0);
        let cmds = engine.submit_answer(Some(0), wrong);
        let shake_token = tokens(&cmds)[0];
        let reset = engine.animation_complete(shake_token);
        assert_eq!(tokens(&reset).len(), 1);

        // The shake token was superseded by the reset animation
        assert!(engine.animation_complete(shake_token).is_empty());
        assert!(engine.locked());

        engine.animation_complete(tokens(&reset)[0]);
        assert!(!engine.locked());
    }

    #[test]
    fn test_select_door_enforces_order_and_solved() {
        let mut engine = engine(1, 1);
        let cmds = engine.select_door(0);
        assert!(!cmds.is_empty());
        assert_eq!(engine.awaiting_door(), Some(0));

        solve_current(&mut engine);
        // Sole door solved; current_door clamps to it, selection refused
        let cmds = engine.select_door(0);
        assert!(matches!(cmds.as_slice(), [Command::UpdateHud(_)]));
    }

    #[test]
    fn test_submit_side_resolves_layout() {
        let mut engine = engine(1, 3);
        let layout = engine.doors()[0].layout;
        let correct = correct_choice(&engine, 0);
        let side = if layout.left == correct { Side::Left } else { Side::Right };
        let cmds = engine.submit_side(side);
        assert_eq!(engine.score(), 1);
        assert_eq!(tokens(&cmds).len(), 1);
    }

    #[test]
    fn test_level_complete_and_advance() {
        let mut engine = engine(2, 3);
        assert!(engine.advance_level().is_empty()); // rejected mid-level
        for _ in 0..3 {
            solve_current(&mut engine);
        }
        assert!(engine.level_complete());
        assert_eq!(engine.score(), 3);

        let cmds = engine.next_clicked();
        assert!(!cmds.is_empty());
        assert_eq!(engine.current_level(), 1);
        assert_eq!(engine.current_door(), 0);
        assert!(engine.doors().iter().all(|d| !d.solved));
        assert_eq!(engine.score(), 3); // score carries across levels
    }

    #[test]
    fn test_finish_only_on_cleared_final_level() {
        let mut engine = engine(1, 3);
        assert!(engine.finish().is_empty());
        for _ in 0..3 {
            solve_current(&mut engine);
        }
        assert!(engine.advance_level().is_empty()); // no level after the last
        let cmds = engine.finish();
        assert!(engine.in_summary());
        let summary_text = cmds
            .iter()
            .find_map(|c| match c {
                Command::UpdateHud(h) => h.summary.clone(),
                _ => None,
            })
            .unwrap();
        assert!(summary_text.visible);
        assert!(summary_text.text.contains("3 / 3"));
    }

    #[test]
    fn test_summary_drops_answers_and_restart_resets() {
        let mut engine = engine(1, 2);
        for _ in 0..2 {
            solve_current(&mut engine);
        }
        engine.next_clicked(); // -> summary
        assert!(engine.in_summary());
        assert!(engine.submit_answer(Some(0), 0).is_empty());
        assert!(engine.select_door(0).is_empty());

        engine.next_clicked(); // -> restart
        assert!(!engine.in_summary());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.current_level(), 0);
        assert_eq!(engine.current_door(), 0);
        assert!(engine.doors().iter().all(|d| !d.solved));
        assert_eq!(engine.doors()[0].question_ref, 0);
    }

    #[test]
    fn test_full_run_score_equals_total_questions() {
        let mut engine = engine(3, 3);
        for level in 0..3 {
            for _ in 0..3 {
                solve_current(&mut engine);
            }
            if level < 2 {
                engine.next_clicked();
            }
        }
        engine.next_clicked();
        assert!(engine.in_summary());
        assert_eq!(engine.score(), engine.campaign().total_questions());
    }

    #[test]
    fn test_door_picked_routes_select_or_submit() {
        let mut engine = engine(1, 3);
        let cmds = engine.door_picked(0, None);
        assert!(tokens(&cmds).is_empty());
        assert_eq!(engine.awaiting_door(), Some(0));

        let cmds = engine.door_picked(1, Some(Side::Left));
        assert!(matches!(cmds.as_slice(), [Command::UpdateHud(_)])); // order guard

        let layout = engine.doors()[0].layout;
        let correct = correct_choice(&engine, 0);
        let side = if layout.left == correct { Side::Left } else { Side::Right };
        let cmds = engine.door_picked(0, Some(side));
        assert_eq!(tokens(&cmds).len(), 1);
        assert_eq!(engine.score(), 1);
    }
}
