//! Party text formatter
//!
//! Renders a [`Party`] into the two text blocks handed to guests: the
//! invitation and the buffet/music preference sheet. Both renderings are
//! pure functions of their input.

pub mod template;

use crate::core::error::FormatError;
use crate::party::Party;
use std::fmt::{Display, Write};
use template::*;

/// Renders party records as display text
pub struct PartyFormatter;

impl PartyFormatter {
    /// Render the invitation block
    ///
    /// Lines, in order: banner, host name, location, date (`DD/MM/YYYY`),
    /// time (`HH:MM`), group link or [`GROUP_LINK_PLACEHOLDER`].
    ///
    /// # Errors
    /// [`FormatError::MissingDate`] / [`FormatError::MissingTime`] when the
    /// party lacks a value, [`FormatError::Render`] if writing a value fails.
    pub fn render_invitation(party: &Party) -> Result<String, FormatError> {
        let date = party.date.ok_or(FormatError::MissingDate)?;
        let time = party.time.ok_or(FormatError::MissingTime)?;
        let date = Self::render_value(date.format(DATE_PATTERN))?;
        let time = Self::render_value(time.format(TIME_PATTERN))?;
        let link = party.group_link().unwrap_or(GROUP_LINK_PLACEHOLDER);

        let mut sheet = Sheet::open(INVITATION_TITLE);
        sheet.line(HOST_LABEL, &party.host_name);
        sheet.line(LOCATION_LABEL, &party.location);
        sheet.line(DATE_LABEL, &date);
        sheet.line(TIME_LABEL, &time);
        sheet.line(GROUP_LINK_LABEL, link);
        Ok(sheet.close())
    }

    /// Render the preference block
    ///
    /// Buffet items and music styles are joined with `", "` in their given
    /// order; an empty list renders as an empty string.
    pub fn render_preferences(party: &Party) -> String {
        let mut sheet = Sheet::open(PREFERENCES_TITLE);
        sheet.line(BUFFET_LABEL, &party.buffet_items.join(LIST_SEPARATOR));
        sheet.line(MUSIC_LABEL, &party.music_styles.join(LIST_SEPARATOR));
        sheet.close()
    }

    fn render_value(value: impl Display) -> Result<String, FormatError> {
        let mut rendered = String::new();
        write!(rendered, "{}", value)?;
        Ok(rendered)
    }
}

/// A block under construction: leading newline, banner, labelled lines,
/// closing rule, trailing indent
struct Sheet {
    output: String,
}

impl Sheet {
    fn open(title: &str) -> Self {
        let mut output = String::from("\n");
        output.push_str(INDENT);
        output.push_str(RULE);
        output.push('\n');
        output.push_str(title);
        output.push('\n');
        output.push_str(INDENT);
        output.push_str(RULE);
        output.push('\n');
        Self { output }
    }

    fn line(&mut self, label: &str, value: &str) {
        self.output.push_str(INDENT);
        self.output.push_str(label);
        self.output.push(' ');
        self.output.push_str(value);
        self.output.push('\n');
    }

    fn close(mut self) -> String {
        self.output.push_str(INDENT);
        self.output.push_str(RULE);
        self.output.push('\n');
        self.output.push_str(INDENT);
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn ana_party() -> Party {
        Party::builder()
            .host_name("Ana")
            .location("Salão X")
            .date(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap())
            .time(NaiveTime::from_hms_opt(15, 30, 0).unwrap())
            .buffet_items(["Salgados"])
            .music_styles(["Samba"])
            .build()
    }

    #[test]
    fn test_invitation_scenario() {
        let text = PartyFormatter::render_invitation(&ana_party()).unwrap();
        assert!(text.contains("Ana"));
        assert!(text.contains("Salão X"));
        assert!(text.contains("10/05/2024"));
        assert!(text.contains("15:30"));
        assert!(text.contains("Não informado"));
    }

    #[test]
    fn test_invitation_exact_layout() {
        let party = Party::builder()
            .host_name("Ana")
            .location("Salão X")
            .date(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap())
            .time(NaiveTime::from_hms_opt(15, 30, 0).unwrap())
            .group_link("https://chat.example/ana")
            .build();

        let expected = "\n\
            \x20       ================================\n\
            \x20              CONVITE PARA A FESTA\n\
            \x20       ================================\n\
            \x20       🎉 Nome do Aniversariante: Ana\n\
            \x20       📍 Local: Salão X\n\
            \x20       📅 Data: 10/05/2024\n\
            \x20       ⏰ Hora: 15:30\n\
            \x20       🔗 Link do Grupo: https://chat.example/ana\n\
            \x20       ================================\n\
            \x20       ";
        assert_eq!(PartyFormatter::render_invitation(&party).unwrap(), expected);
    }

    #[test]
    fn test_date_and_time_are_zero_padded() {
        let party = Party::builder()
            .date(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap())
            .time(NaiveTime::from_hms_opt(7, 5, 59).unwrap())
            .build();
        let text = PartyFormatter::render_invitation(&party).unwrap();
        assert!(text.contains("📅 Data: 03/01/2025\n"));
        assert!(text.contains("⏰ Hora: 07:05\n"));
    }

    #[test]
    fn test_time_uses_24_hour_clock() {
        let party = Party::builder()
            .date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
            .time(NaiveTime::from_hms_opt(23, 45, 0).unwrap())
            .build();
        let text = PartyFormatter::render_invitation(&party).unwrap();
        assert!(text.contains("⏰ Hora: 23:45\n"));
    }

    #[test]
    fn test_group_link_is_rendered_verbatim() {
        let mut party = ana_party();
        party.group_link = Some("https://chat.whatsapp.com/XyZ".to_string());
        let text = PartyFormatter::render_invitation(&party).unwrap();
        assert!(text.contains("🔗 Link do Grupo: https://chat.whatsapp.com/XyZ\n"));
        assert!(!text.contains(GROUP_LINK_PLACEHOLDER));
    }

    #[test]
    fn test_empty_group_link_uses_placeholder() {
        let mut party = ana_party();
        party.group_link = Some(String::new());
        let text = PartyFormatter::render_invitation(&party).unwrap();
        assert!(text.contains("🔗 Link do Grupo: Não informado\n"));
    }

    #[test]
    fn test_missing_date_fails() {
        let mut party = ana_party();
        party.date = None;
        let err = PartyFormatter::render_invitation(&party).unwrap_err();
        assert!(matches!(err, FormatError::MissingDate));
    }

    #[test]
    fn test_missing_time_fails() {
        let mut party = ana_party();
        party.time = None;
        let err = PartyFormatter::render_invitation(&party).unwrap_err();
        assert!(matches!(err, FormatError::MissingTime));
    }

    #[test]
    fn test_preferences_scenario() {
        let text = PartyFormatter::render_preferences(&ana_party());
        assert!(text.contains("Salgados"));
        assert!(text.contains("Samba"));
    }

    #[test]
    fn test_preferences_join_in_order() {
        let party = Party::builder()
            .buffet_items(["Pizza", "Bolo"])
            .music_styles(["Pop", "Rock"])
            .build();
        let text = PartyFormatter::render_preferences(&party);
        assert!(text.contains("Pizza, Bolo"));
        assert!(text.contains("Pop, Rock"));
    }

    #[test]
    fn test_preferences_exact_layout_with_empty_lists() {
        let expected = "\n\
            \x20       ================================\n\
            \x20          PREFERÊNCIAS DA FESTA\n\
            \x20       ================================\n\
            \x20       🍴 Buffet: \n\
            \x20       🎵 Estilos Musicais: \n\
            \x20       ================================\n\
            \x20       ";
        assert_eq!(PartyFormatter::render_preferences(&Party::default()), expected);
    }

    #[test]
    fn test_both_sheets_share_framing() {
        let party = ana_party();
        let invitation = PartyFormatter::render_invitation(&party).unwrap();
        let preferences = PartyFormatter::render_preferences(&party);
        let opening = format!("\n{INDENT}{RULE}\n");
        let closing = format!("\n{INDENT}{RULE}\n{INDENT}");

        for text in [&invitation, &preferences] {
            assert!(text.starts_with(&opening));
            assert!(text.ends_with(&closing));
            assert_eq!(text.matches(RULE).count(), 3);
        }
        assert!(preferences.contains("\n        🍴 Buffet: Salgados\n        🎵 Estilos Musicais: Samba\n"));
    }

    #[test]
    fn test_failing_value_becomes_render_error() {
        struct Broken;

        impl Display for Broken {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Err(std::fmt::Error)
            }
        }

        let err = PartyFormatter::render_value(Broken).unwrap_err();
        assert!(matches!(err, FormatError::Render(_)));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let party = ana_party();
        assert_eq!(
            PartyFormatter::render_invitation(&party).unwrap(),
            PartyFormatter::render_invitation(&party).unwrap()
        );
        assert_eq!(
            PartyFormatter::render_preferences(&party),
            PartyFormatter::render_preferences(&party)
        );
    }
}
