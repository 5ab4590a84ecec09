use crate::models::{Ritual, Sleep};
use chrono::{Local, NaiveDate};

/// The one session-scoped selection. Ritual and emoji sets keep insertion
/// order; the share message renders them in the order they were picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    date: Option<NaiveDate>,
    sleep: Option<Sleep>,
    rituals: Vec<Ritual>,
    custom_emojis: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive())
    }

    pub fn starting_on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            sleep: None,
            rituals: Vec::new(),
            custom_emojis: Vec::new(),
        }
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// Re-selecting the current rating clears it; anything else overwrites.
    pub fn toggle_sleep(&mut self, value: Sleep) {
        if self.sleep == Some(value) {
            self.sleep = None;
        } else {
            self.sleep = Some(value);
        }
    }

    pub fn toggle_ritual(&mut self, value: Ritual) {
        if let Some(pos) = self.rituals.iter().position(|r| *r == value) {
            self.rituals.remove(pos);
        } else {
            self.rituals.push(value);
        }
    }

    pub fn add_custom_emoji(&mut self, token: &str) {
        if !self.custom_emojis.iter().any(|e| e == token) {
            self.custom_emojis.push(token.to_string());
        }
    }

    pub fn remove_custom_emoji(&mut self, token: &str) {
        self.custom_emojis.retain(|e| e != token);
    }

    /// Sleep is supplementary context only; rituals or emojis are what make
    /// the selection worth sharing.
    pub fn is_shareable(&self) -> bool {
        self.date.is_some() && (!self.rituals.is_empty() || !self.custom_emojis.is_empty())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn sleep(&self) -> Option<Sleep> {
        self.sleep
    }

    pub fn rituals(&self) -> &[Ritual] {
        &self.rituals
    }

    pub fn custom_emojis(&self) -> &[String] {
        &self.custom_emojis
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection::starting_on(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())
    }

    #[test]
    fn ritual_toggle_alternates_membership() {
        let mut sel = selection();
        for round in 0..4 {
            sel.toggle_ritual(Ritual::Coffee);
            let present = sel.rituals().contains(&Ritual::Coffee);
            assert_eq!(present, round % 2 == 0);
        }
    }

    #[test]
    fn ritual_toggle_keeps_insertion_order() {
        let mut sel = selection();
        sel.toggle_ritual(Ritual::Fruit);
        sel.toggle_ritual(Ritual::Coffee);
        sel.toggle_ritual(Ritual::Learning);
        assert_eq!(
            sel.rituals(),
            &[Ritual::Fruit, Ritual::Coffee, Ritual::Learning]
        );

        sel.toggle_ritual(Ritual::Coffee);
        assert_eq!(sel.rituals(), &[Ritual::Fruit, Ritual::Learning]);
    }

    #[test]
    fn sleep_reselect_clears() {
        let mut sel = selection();
        sel.toggle_sleep(Sleep::Great);
        assert_eq!(sel.sleep(), Some(Sleep::Great));
        sel.toggle_sleep(Sleep::Great);
        assert_eq!(sel.sleep(), None);
    }

    #[test]
    fn sleep_overwrites_without_clearing_first() {
        let mut sel = selection();
        sel.toggle_sleep(Sleep::Bad);
        sel.toggle_sleep(Sleep::Nightmare);
        assert_eq!(sel.sleep(), Some(Sleep::Nightmare));
    }

    #[test]
    fn sleep_double_toggle_is_self_inverse() {
        let mut sel = selection();
        sel.toggle_sleep(Sleep::Great);
        sel.toggle_sleep(Sleep::Great);
        assert_eq!(sel.sleep(), None);

        sel.toggle_sleep(Sleep::Ok);
        let before = sel.clone();
        sel.toggle_sleep(Sleep::Ok);
        sel.toggle_sleep(Sleep::Ok);
        assert_eq!(sel, before);
    }

    #[test]
    fn add_custom_emoji_is_idempotent() {
        let mut sel = selection();
        sel.add_custom_emoji("🌈");
        sel.add_custom_emoji("🌈");
        assert_eq!(sel.custom_emojis(), &["🌈".to_string()]);
    }

    #[test]
    fn remove_absent_emoji_is_a_noop() {
        let mut sel = selection();
        sel.add_custom_emoji("🎵");
        let before = sel.clone();
        sel.remove_custom_emoji("🌈");
        assert_eq!(sel, before);
    }

    #[test]
    fn emojis_keep_insertion_order_across_removal() {
        let mut sel = selection();
        sel.add_custom_emoji("🌈");
        sel.add_custom_emoji("🎵");
        sel.add_custom_emoji("🧘");
        sel.remove_custom_emoji("🎵");
        assert_eq!(sel.custom_emojis(), &["🌈".to_string(), "🧘".to_string()]);
    }

    #[test]
    fn shareable_requires_rituals_or_emojis() {
        let mut sel = selection();
        assert!(!sel.is_shareable());

        sel.toggle_sleep(Sleep::Great);
        assert!(!sel.is_shareable());

        sel.toggle_ritual(Ritual::Working);
        assert!(sel.is_shareable());

        sel.toggle_ritual(Ritual::Working);
        sel.add_custom_emoji("🌈");
        assert!(sel.is_shareable());
    }

    #[test]
    fn shareable_requires_a_date() {
        let mut sel = selection();
        sel.toggle_ritual(Ritual::Coffee);
        assert!(sel.is_shareable());

        sel.set_date(None);
        assert!(!sel.is_shareable());
    }
}
