//! Per-locale message tables.
//!
//! Strings are user-safe: no vendor codes, no exception text, no
//! placeholders for diagnostics. Each table must cover [`MessageKey::ALL`];
//! the completeness test in `tests::i18n_tests` enforces it.

use super::{LocaleTable, MessageKey as K};

pub(super) fn english() -> LocaleTable {
    LocaleTable::from_entries(&[
        (K::ErrorAuthInvalidCredentials, "The email or password you entered is incorrect."),
        (K::ErrorAuthEmailNotConfirmed, "Please confirm your email address before signing in."),
        (K::ErrorAuthUserAlreadyExists, "An account with this email already exists."),
        (K::ErrorAuthWeakPassword, "That password is too weak. Please choose a longer one."),
        (K::ErrorAuthRateLimited, "Too many attempts. Please wait a moment and try again."),
        (K::ErrorAuthSessionExpired, "Your session has expired. Please sign in again."),
        (K::ErrorAuthUnknown, "Sign-in failed. Please try again."),
        (K::ErrorPgUniqueViolation, "This entry already exists."),
        (K::ErrorPgForeignKeyViolation, "This entry is still referenced by other data."),
        (K::ErrorPgNotNullViolation, "A required field is missing."),
        (K::ErrorPgCheckViolation, "The entered data is not valid."),
        (K::ErrorPgInsufficientPrivilege, "You don't have permission to do that."),
        (K::ErrorPgSerializationFailure, "The data changed while saving. Please try again."),
        (K::ErrorPgQueryCanceled, "The request took too long and was canceled."),
        (K::ErrorDatabaseNotFound, "The requested note could not be found."),
        (K::ErrorDatabaseSessionExpired, "Your session has expired. Please sign in again."),
        (K::ErrorDatabaseSchemaMismatch, "The app is out of date with the server. Please update."),
        (K::ErrorDatabaseBadRequest, "The request could not be processed."),
        (K::ErrorDatabaseUnknown, "Saving failed due to a database problem."),
        (K::ErrorStorageNotFound, "The attached recording could not be found."),
        (K::ErrorStorageAccessDenied, "You don't have access to this recording."),
        (K::ErrorStorageTooLarge, "This recording is too large to upload."),
        (K::ErrorStorageConflict, "A recording with this name already exists."),
        (K::ErrorStorageUnknown, "Uploading the recording failed."),
        (K::ErrorNetworkUnavailable, "No connection. Please check your network and try again."),
        (K::ErrorVoiceUnavailable, "Voice input is not available right now."),
        (K::ErrorValidationEmptyTitle, "Please give your note a title."),
        (K::ErrorValidationTitleTooLong, "That title is too long."),
        (K::ErrorUnknown, "Something went wrong. Please try again."),
        (K::ErrorTitleAuth, "Sign-in problem"),
        (K::ErrorTitleDatabase, "Sync problem"),
        (K::ErrorTitleNetwork, "No connection"),
        (K::ErrorTitleVoice, "Voice input"),
        (K::ErrorTitleValidation, "Check your input"),
        (K::ErrorTitleUnknown, "Unexpected error"),
    ])
}

pub(super) fn german() -> LocaleTable {
    LocaleTable::from_entries(&[
        (K::ErrorAuthInvalidCredentials, "E-Mail oder Passwort ist falsch."),
        (K::ErrorAuthEmailNotConfirmed, "Bitte bestätige zuerst deine E-Mail-Adresse."),
        (K::ErrorAuthUserAlreadyExists, "Ein Konto mit dieser E-Mail existiert bereits."),
        (K::ErrorAuthWeakPassword, "Das Passwort ist zu schwach. Bitte wähle ein längeres."),
        (K::ErrorAuthRateLimited, "Zu viele Versuche. Bitte warte kurz und versuche es erneut."),
        (K::ErrorAuthSessionExpired, "Deine Sitzung ist abgelaufen. Bitte melde dich erneut an."),
        (K::ErrorAuthUnknown, "Anmeldung fehlgeschlagen. Bitte versuche es erneut."),
        (K::ErrorPgUniqueViolation, "Dieser Eintrag existiert bereits."),
        (K::ErrorPgForeignKeyViolation, "Dieser Eintrag wird noch von anderen Daten verwendet."),
        (K::ErrorPgNotNullViolation, "Ein Pflichtfeld fehlt."),
        (K::ErrorPgCheckViolation, "Die eingegebenen Daten sind ungültig."),
        (K::ErrorPgInsufficientPrivilege, "Dafür fehlt dir die Berechtigung."),
        (K::ErrorPgSerializationFailure, "Die Daten wurden zwischenzeitlich geändert. Bitte erneut versuchen."),
        (K::ErrorPgQueryCanceled, "Die Anfrage dauerte zu lange und wurde abgebrochen."),
        (K::ErrorDatabaseNotFound, "Die angeforderte Notiz wurde nicht gefunden."),
        (K::ErrorDatabaseSessionExpired, "Deine Sitzung ist abgelaufen. Bitte melde dich erneut an."),
        (K::ErrorDatabaseSchemaMismatch, "Die App ist nicht mehr aktuell. Bitte aktualisieren."),
        (K::ErrorDatabaseBadRequest, "Die Anfrage konnte nicht verarbeitet werden."),
        (K::ErrorDatabaseUnknown, "Speichern wegen eines Datenbankproblems fehlgeschlagen."),
        (K::ErrorStorageNotFound, "Die angehängte Aufnahme wurde nicht gefunden."),
        (K::ErrorStorageAccessDenied, "Du hast keinen Zugriff auf diese Aufnahme."),
        (K::ErrorStorageTooLarge, "Diese Aufnahme ist zu groß zum Hochladen."),
        (K::ErrorStorageConflict, "Eine Aufnahme mit diesem Namen existiert bereits."),
        (K::ErrorStorageUnknown, "Hochladen der Aufnahme fehlgeschlagen."),
        (K::ErrorNetworkUnavailable, "Keine Verbindung. Bitte prüfe dein Netzwerk und versuche es erneut."),
        (K::ErrorVoiceUnavailable, "Spracheingabe ist gerade nicht verfügbar."),
        (K::ErrorValidationEmptyTitle, "Bitte gib deiner Notiz einen Titel."),
        (K::ErrorValidationTitleTooLong, "Dieser Titel ist zu lang."),
        (K::ErrorUnknown, "Etwas ist schiefgelaufen. Bitte versuche es erneut."),
        (K::ErrorTitleAuth, "Anmeldeproblem"),
        (K::ErrorTitleDatabase, "Synchronisierungsproblem"),
        (K::ErrorTitleNetwork, "Keine Verbindung"),
        (K::ErrorTitleVoice, "Spracheingabe"),
        (K::ErrorTitleValidation, "Eingabe prüfen"),
        (K::ErrorTitleUnknown, "Unerwarteter Fehler"),
    ])
}

pub(super) fn spanish() -> LocaleTable {
    LocaleTable::from_entries(&[
        (K::ErrorAuthInvalidCredentials, "El correo o la contraseña no son correctos."),
        (K::ErrorAuthEmailNotConfirmed, "Confirma tu correo electrónico antes de iniciar sesión."),
        (K::ErrorAuthUserAlreadyExists, "Ya existe una cuenta con este correo."),
        (K::ErrorAuthWeakPassword, "La contraseña es demasiado débil. Elige una más larga."),
        (K::ErrorAuthRateLimited, "Demasiados intentos. Espera un momento y vuelve a intentarlo."),
        (K::ErrorAuthSessionExpired, "Tu sesión ha caducado. Inicia sesión de nuevo."),
        (K::ErrorAuthUnknown, "No se pudo iniciar sesión. Inténtalo de nuevo."),
        (K::ErrorPgUniqueViolation, "Esta entrada ya existe."),
        (K::ErrorPgForeignKeyViolation, "Esta entrada todavía es utilizada por otros datos."),
        (K::ErrorPgNotNullViolation, "Falta un campo obligatorio."),
        (K::ErrorPgCheckViolation, "Los datos introducidos no son válidos."),
        (K::ErrorPgInsufficientPrivilege, "No tienes permiso para hacer eso."),
        (K::ErrorPgSerializationFailure, "Los datos cambiaron mientras se guardaban. Inténtalo de nuevo."),
        (K::ErrorPgQueryCanceled, "La solicitud tardó demasiado y fue cancelada."),
        (K::ErrorDatabaseNotFound, "No se encontró la nota solicitada."),
        (K::ErrorDatabaseSessionExpired, "Tu sesión ha caducado. Inicia sesión de nuevo."),
        (K::ErrorDatabaseSchemaMismatch, "La aplicación está desactualizada respecto al servidor. Actualízala."),
        (K::ErrorDatabaseBadRequest, "No se pudo procesar la solicitud."),
        (K::ErrorDatabaseUnknown, "No se pudo guardar por un problema de base de datos."),
        (K::ErrorStorageNotFound, "No se encontró la grabación adjunta."),
        (K::ErrorStorageAccessDenied, "No tienes acceso a esta grabación."),
        (K::ErrorStorageTooLarge, "Esta grabación es demasiado grande para subirla."),
        (K::ErrorStorageConflict, "Ya existe una grabación con este nombre."),
        (K::ErrorStorageUnknown, "No se pudo subir la grabación."),
        (K::ErrorNetworkUnavailable, "Sin conexión. Comprueba tu red y vuelve a intentarlo."),
        (K::ErrorVoiceUnavailable, "La entrada de voz no está disponible ahora mismo."),
        (K::ErrorValidationEmptyTitle, "Ponle un título a tu nota."),
        (K::ErrorValidationTitleTooLong, "Ese título es demasiado largo."),
        (K::ErrorUnknown, "Algo salió mal. Inténtalo de nuevo."),
        (K::ErrorTitleAuth, "Problema de inicio de sesión"),
        (K::ErrorTitleDatabase, "Problema de sincronización"),
        (K::ErrorTitleNetwork, "Sin conexión"),
        (K::ErrorTitleVoice, "Entrada de voz"),
        (K::ErrorTitleValidation, "Revisa tu entrada"),
        (K::ErrorTitleUnknown, "Error inesperado"),
    ])
}
