//! Fixed user-facing strings (it-IT).

pub const LOADING: &str = "Caricamento disponibilità in corso...";
pub const LOAD_FAILED: &str =
    "Non è stato possibile caricare le disponibilità. Riprova più tardi.";
pub const NO_DATES: &str = "Al momento non ci sono date disponibili per la prenotazione.";
pub const POPUP_BLOCKED: &str = "Impossibile aprire la finestra per il login con Google. Controlla che il blocco popup sia disabilitato.";
pub const ADD_VOLUNTEER_LABEL: &str = "Prenotati per questa data";
