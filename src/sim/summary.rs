//! End-of-run report
//!
//! Built from the state at the moment the run ended so the presentation can
//! explain what went wrong and what the runner ate.

use serde::Serialize;

use super::state::{GameState, Vitals};

/// Why the run finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndCause {
    Dehydration,
    Exhaustion,
    /// Both vitals emptied on the same tick
    Both,
    /// Ended by request with vitals remaining
    Quit,
}

impl EndCause {
    pub fn from_vitals(vitals: &Vitals) -> Self {
        match (vitals.hydration <= 0.0, vitals.energy <= 0.0) {
            (true, true) => EndCause::Both,
            (true, false) => EndCause::Dehydration,
            (false, true) => EndCause::Exhaustion,
            (false, false) => EndCause::Quit,
        }
    }
}

/// Nutrition feedback shown after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Insight {
    Dehydrated,
    OutOfEnergy,
    SugarCrash,
    StayedHydrated,
    NothingCollected,
}

impl Insight {
    pub fn message(&self) -> &'static str {
        match self {
            Insight::Dehydrated => "You collapsed from dehydration! Drink more water next time.",
            Insight::OutOfEnergy => {
                "You ran out of energy! Eat healthy carbs like Bananas for sustained power."
            }
            Insight::SugarCrash => {
                "Soda gave you a quick boost but dehydrated you. Watch out for sugar crashes!"
            }
            Insight::StayedHydrated => "Good job staying hydrated with Water and Coconut Water!",
            Insight::NothingCollected => "Try to collect food items to stay alive longer!",
        }
    }
}

/// Final numbers and feedback for a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub score: u64,
    /// Distance actually covered
    pub distance: f32,
    pub calories: f32,
    pub items_collected: usize,
    pub cause: EndCause,
    pub insights: Vec<Insight>,
}

impl RunSummary {
    pub fn from_state(state: &GameState) -> Self {
        let vitals = &state.vitals;
        let ate = |id: &str| state.collected.iter().any(|item| item.id == id);

        let mut insights = Vec::new();
        if vitals.hydration <= 0.0 {
            insights.push(Insight::Dehydrated);
        }
        if vitals.energy <= 0.0 {
            insights.push(Insight::OutOfEnergy);
        }
        if ate("soda") {
            insights.push(Insight::SugarCrash);
        }
        if ate("water") || ate("coconut") {
            insights.push(Insight::StayedHydrated);
        }
        if state.collected.is_empty() {
            insights.push(Insight::NothingCollected);
        }

        Self {
            score: state.score,
            distance: state.distance,
            calories: vitals.calories,
            items_collected: state.collected.len(),
            cause: EndCause::from_vitals(vitals),
            insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::find_item;
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;

    #[test]
    fn test_dehydration_summary() {
        let tuning = Tuning::default();
        let mut state = GameState::default();
        state.start();
        while state.is_playing() {
            tick(&mut state, &tuning, 1.0);
        }
        let summary = RunSummary::from_state(&state);
        assert_eq!(summary.cause, EndCause::Dehydration);
        assert_eq!(summary.insights, vec![Insight::Dehydrated, Insight::NothingCollected]);
        // Distance is the tracked field, not derived from calories
        assert_eq!(summary.distance, state.distance);
        assert!(summary.distance != (summary.calories * 2.0).floor());
    }

    #[test]
    fn test_pickup_insights() {
        let mut state = GameState::default();
        state.start();
        state.collect_item(find_item("soda").unwrap());
        state.collect_item(find_item("coconut").unwrap());
        state.end();
        let summary = RunSummary::from_state(&state);
        assert_eq!(summary.cause, EndCause::Quit);
        assert_eq!(summary.items_collected, 2);
        assert_eq!(summary.insights, vec![Insight::SugarCrash, Insight::StayedHydrated]);
    }

    #[test]
    fn test_both_vitals_empty() {
        let vitals = Vitals {
            energy: 0.0,
            hydration: 0.0,
            calories: 10.0,
        };
        assert_eq!(EndCause::from_vitals(&vitals), EndCause::Both);
    }
}
