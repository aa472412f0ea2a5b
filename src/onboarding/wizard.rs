//! The first-run wizard: six fixed steps that collect the attributes a new
//! profile needs, then hand the accumulated draft back exactly once.
//!
//! Step layout: 1 welcome, 2 blood type + Rh factor, 3 height, 4 current
//! weight, 5 target weight, 6 diet duration.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::profile::repo_types::{BloodType, Profile, RhFactor};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 6;

/// The attributes collected across the wizard steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub blood_type: BloodType,
    pub rh_factor: RhFactor,
    pub height: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    pub diet_duration: i32,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            blood_type: BloodType::A,
            rh_factor: RhFactor::Plus,
            height: 1.70,
            current_weight: 70.0,
            target_weight: 65.0,
            diet_duration: 4,
        }
    }
}

impl ProfileDraft {
    /// Pre-seed the draft from whatever profile state already exists.
    pub fn seeded_from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            blood_type: profile.blood_type,
            rh_factor: profile.rh_factor,
            height: profile.height,
            current_weight: profile.current_weight,
            target_weight: profile.target_weight,
            diet_duration: profile.diet_duration,
        }
    }
}

/// Normalize locale decimal text (comma or dot separator) to a float.
///
/// Mirrors the permissive input contract of the original forms: a string
/// that does not look like a decimal yields `None` (caller keeps the prior
/// value); a matching-but-empty string such as "" or "." parses to 0.
pub fn parse_decimal(text: &str) -> Option<f64> {
    lazy_static! {
        static ref DECIMAL_RE: Regex = Regex::new(r"^\d*\.?\d*$").unwrap();
    }
    let normalized = text.replace(',', ".");
    if !DECIMAL_RE.is_match(&normalized) {
        return None;
    }
    Some(normalized.parse::<f64>().unwrap_or(0.0))
}

/// Linear six-step wizard. `advance` walks forward until the last step and
/// then yields the draft; `retreat` walks back and stops at the first step.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: u8,
    draft: ProfileDraft,
    completed: bool,
}

impl Wizard {
    pub fn new(profile: &Profile) -> Self {
        Self {
            step: FIRST_STEP,
            draft: ProfileDraft::seeded_from(profile),
            completed: false,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Move one step forward. At the last step the accumulated draft is
    /// returned instead (once only) and the counter stays put; persisting it
    /// is the caller's job.
    pub fn advance(&mut self) -> Option<ProfileDraft> {
        if self.step < LAST_STEP {
            self.step += 1;
            return None;
        }
        if self.completed {
            return None;
        }
        self.completed = true;
        Some(self.draft.clone())
    }

    /// Move one step back; no-op at the first step.
    pub fn retreat(&mut self) {
        if self.step > FIRST_STEP {
            self.step -= 1;
        }
    }

    pub fn set_blood_type(&mut self, blood_type: BloodType) {
        self.draft.blood_type = blood_type;
    }

    pub fn set_rh_factor(&mut self, rh_factor: RhFactor) {
        self.draft.rh_factor = rh_factor;
    }

    pub fn set_diet_duration(&mut self, weeks: i32) {
        self.draft.diet_duration = weeks;
    }

    /// Text setters keep the previous value on input that is not a decimal.
    pub fn set_height(&mut self, text: &str) {
        if let Some(v) = parse_decimal(text) {
            self.draft.height = v;
        }
    }

    pub fn set_current_weight(&mut self, text: &str) {
        if let Some(v) = parse_decimal(text) {
            self.draft.current_weight = v;
        }
    }

    pub fn set_target_weight(&mut self, text: &str) {
        if let Some(v) = parse_decimal(text) {
            self.draft.target_weight = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn fresh_wizard() -> Wizard {
        let profile = Profile::default_for(Uuid::new_v4(), "ana@example.com");
        Wizard::new(&profile)
    }

    #[test]
    fn draft_seeds_from_profile_defaults() {
        let w = fresh_wizard();
        assert_eq!(w.step(), 1);
        assert_eq!(w.draft().blood_type, BloodType::A);
        assert_eq!(w.draft().rh_factor, RhFactor::Plus);
        assert_eq!(w.draft().height, 1.70);
        assert_eq!(w.draft().current_weight, 70.0);
        assert_eq!(w.draft().target_weight, 65.0);
        assert_eq!(w.draft().diet_duration, 4);
    }

    #[test]
    fn six_advances_complete_exactly_once() {
        let mut w = fresh_wizard();
        let mut completions = 0;
        for _ in 0..6 {
            if w.advance().is_some() {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(w.step(), 6);

        // A stray seventh advance neither moves nor re-fires.
        assert!(w.advance().is_none());
        assert_eq!(w.step(), 6);
    }

    #[test]
    fn completion_carries_the_accumulated_draft() {
        let mut w = fresh_wizard();
        w.set_blood_type(BloodType::O);
        w.set_rh_factor(RhFactor::Minus);
        w.set_height("1,82");
        w.set_current_weight("88,5");
        w.set_target_weight("80");
        w.set_diet_duration(8);

        let mut done = None;
        for _ in 0..6 {
            if let Some(draft) = w.advance() {
                done = Some(draft);
            }
        }
        let draft = done.expect("wizard should complete");
        assert_eq!(draft.blood_type, BloodType::O);
        assert_eq!(draft.rh_factor, RhFactor::Minus);
        assert_eq!(draft.height, 1.82);
        assert_eq!(draft.current_weight, 88.5);
        assert_eq!(draft.target_weight, 80.0);
        assert_eq!(draft.diet_duration, 8);
    }

    #[test]
    fn retreat_is_a_no_op_at_the_first_step() {
        let mut w = fresh_wizard();
        w.retreat();
        assert_eq!(w.step(), 1);
        w.advance();
        w.advance();
        w.retreat();
        assert_eq!(w.step(), 2);
    }

    #[test]
    fn parse_decimal_accepts_comma_and_dot() {
        assert_eq!(parse_decimal("1,75"), Some(1.75));
        assert_eq!(parse_decimal("1.75"), Some(1.75));
        assert_eq!(parse_decimal("70"), Some(70.0));
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("70kg"), None);
        assert_eq!(parse_decimal("-5"), None);
    }

    #[test]
    fn parse_decimal_maps_empty_ish_input_to_zero() {
        assert_eq!(parse_decimal(""), Some(0.0));
        assert_eq!(parse_decimal("."), Some(0.0));
        assert_eq!(parse_decimal(","), Some(0.0));
    }

    #[test]
    fn invalid_text_keeps_previous_value() {
        let mut w = fresh_wizard();
        w.set_height("1,80");
        w.set_height("not a number");
        assert_eq!(w.draft().height, 1.80);
    }
}
