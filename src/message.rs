use crate::selection::Selection;

/// Renders the share text for the current selection, or `None` when no date
/// is picked (share and copy are disabled in that state anyway).
pub fn compose_message(selection: &Selection) -> Option<String> {
    let date = selection.date()?;
    let mut message = format!("✨ What I Need Today - {}\n\n", date.format("%B %-d, %Y"));

    if let Some(sleep) = selection.sleep() {
        message.push_str(&format!("Sleep: {} {}\n\n", sleep.emoji(), sleep.label()));
    }

    if !selection.rituals().is_empty() {
        message.push_str("What we do today:\n");
        for ritual in selection.rituals() {
            message.push_str(&format!("{} {}\n", ritual.emoji(), ritual.name()));
        }
    }

    if !selection.custom_emojis().is_empty() {
        message.push_str("\nAnd also:\n");
        for emoji in selection.custom_emojis() {
            message.push_str(emoji);
            message.push(' ');
        }
        message.push('\n');
    }

    message.push_str("\nHave a nice day ❤️");
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ritual, Sleep};
    use chrono::NaiveDate;

    fn on(year: i32, month: u32, day: u32) -> Selection {
        Selection::starting_on(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn message_with_sleep_and_one_ritual() {
        let mut sel = on(2025, 1, 5);
        sel.toggle_sleep(Sleep::Great);
        sel.toggle_ritual(Ritual::Coffee);

        let message = compose_message(&sel).unwrap();
        assert_eq!(
            message,
            "✨ What I Need Today - January 5, 2025\n\n\
             Sleep: 😊 Great\n\n\
             What we do today:\n\
             ☕ Coffee\n\
             \nHave a nice day ❤️"
        );
    }

    #[test]
    fn message_with_only_custom_emojis() {
        let mut sel = on(2025, 3, 10);
        sel.add_custom_emoji("🌈");
        sel.add_custom_emoji("🎵");

        let message = compose_message(&sel).unwrap();
        assert!(!message.contains("Sleep:"));
        assert!(!message.contains("What we do today:"));
        assert!(message.contains("And also:\n🌈 🎵 \n"));
        assert_eq!(
            message,
            "✨ What I Need Today - March 10, 2025\n\n\
             \nAnd also:\n\
             🌈 🎵 \n\
             \nHave a nice day ❤️"
        );
    }

    #[test]
    fn rituals_render_in_insertion_order() {
        let mut sel = on(2025, 1, 5);
        sel.toggle_ritual(Ritual::Fruit);
        sel.toggle_ritual(Ritual::Coffee);

        let message = compose_message(&sel).unwrap();
        let fruit = message.find("🍓 Fruit").unwrap();
        let coffee = message.find("☕ Coffee").unwrap();
        assert!(fruit < coffee);
    }

    #[test]
    fn empty_selection_still_renders_header_and_closing() {
        let sel = on(2026, 8, 8);
        let message = compose_message(&sel).unwrap();
        assert_eq!(
            message,
            "✨ What I Need Today - August 8, 2026\n\n\nHave a nice day ❤️"
        );
    }

    #[test]
    fn day_is_not_zero_padded() {
        let sel = on(2025, 7, 3);
        let message = compose_message(&sel).unwrap();
        assert!(message.starts_with("✨ What I Need Today - July 3, 2025\n"));
    }

    #[test]
    fn no_date_means_no_message() {
        let mut sel = on(2025, 1, 5);
        sel.set_date(None);
        assert!(compose_message(&sel).is_none());
    }
}
