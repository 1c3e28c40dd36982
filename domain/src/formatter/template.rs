//! Fixed text of the invitation and preference sheets
//!
//! Every body line carries the same eight-space indent. Banner titles keep
//! their own centring.

pub(crate) const INDENT: &str = "        ";
pub(crate) const RULE: &str = "================================";

pub(crate) const INVITATION_TITLE: &str = "               CONVITE PARA A FESTA";
pub(crate) const PREFERENCES_TITLE: &str = "           PREFERÊNCIAS DA FESTA";

pub(crate) const HOST_LABEL: &str = "🎉 Nome do Aniversariante:";
pub(crate) const LOCATION_LABEL: &str = "📍 Local:";
pub(crate) const DATE_LABEL: &str = "📅 Data:";
pub(crate) const TIME_LABEL: &str = "⏰ Hora:";
pub(crate) const GROUP_LINK_LABEL: &str = "🔗 Link do Grupo:";
pub(crate) const BUFFET_LABEL: &str = "🍴 Buffet:";
pub(crate) const MUSIC_LABEL: &str = "🎵 Estilos Musicais:";

/// Shown in place of an absent group link
pub const GROUP_LINK_PLACEHOLDER: &str = "Não informado";

/// `DD/MM/YYYY`
pub const DATE_PATTERN: &str = "%d/%m/%Y";
/// `HH:MM`, 24-hour, zero-padded
pub const TIME_PATTERN: &str = "%H:%M";

pub(crate) const LIST_SEPARATOR: &str = ", ";
