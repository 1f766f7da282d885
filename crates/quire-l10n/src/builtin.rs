#![forbid(unsafe_code)]

//! Default English strings for the story runtime.
//!
//! Capitalization and punctuation are deliberate, particularly in the
//! error and warning strings; translations should keep them similar.
//!
//! Keys starting with `_` are fragments included by other strings.
//! `errorNonexistentPassage` expects a `passage` local from its caller.

use crate::table::StringTable;

/// `(key, template)` pairs of the default table.
pub const DEFAULT_STRINGS: &[(&str, &str)] = &[
    // General.
    ("identity", "game"),
    ("aborting", "Aborting"),
    ("cancel", "Cancel"),
    ("close", "Close"),
    ("ok", "OK"),
    // Errors.
    ("errorTitle", "Error"),
    ("errorToggle", "Toggle the error view"),
    ("errorNonexistentPassage", "the passage \"{passage}\" does not exist"),
    (
        "errorSaveMissingData",
        "save is missing required data. Either the loaded file is not a save or the save has become corrupted",
    ),
    ("errorSaveIdMismatch", "save is from the wrong {identity}"),
    // Warnings.
    ("_warningIntroLacking", "Your browser either lacks or has disabled"),
    (
        "_warningOutroDegraded",
        ", so this {identity} is running in a degraded mode. You may be able to continue, however, some parts may not work properly.",
    ),
    (
        "warningNoWebStorage",
        "{_warningIntroLacking} the Web Storage API{_warningOutroDegraded}",
    ),
    (
        "warningDegraded",
        "{_warningIntroLacking} some of the capabilities required by this {identity}{_warningOutroDegraded}",
    ),
    // Debug bar.
    ("debugBarToggle", "Toggle the debug bar"),
    ("debugBarNoWatches", "\u{2014} no watches set \u{2014}"),
    ("debugBarAddWatch", "Add watch"),
    ("debugBarDeleteWatch", "Delete watch"),
    ("debugBarWatchAll", "Watch all"),
    ("debugBarWatchNone", "Delete all"),
    ("debugBarLabelAdd", "Add"),
    ("debugBarLabelWatch", "Watch"),
    // noun: a chance to act
    ("debugBarLabelTurn", "Turn"),
    ("debugBarLabelViews", "Views"),
    ("debugBarViewsToggle", "Toggle the debug views"),
    ("debugBarWatchToggle", "Toggle the watch panel"),
    // UI bar.
    ("uiBarToggle", "Toggle the UI bar"),
    ("uiBarBackward", "Go backward within the {identity} history"),
    ("uiBarForward", "Go forward within the {identity} history"),
    ("uiBarJumpto", "Jump to a specific point within the {identity} history"),
    // Jump To.
    ("jumptoTitle", "Jump To"),
    ("jumptoTurn", "Turn"),
    ("jumptoUnavailable", "No jump points currently available\u{2026}"),
    // Saves.
    ("savesTitle", "Saves"),
    ("savesDisallowed", "Saving has been disallowed on this passage."),
    (
        "savesIncapable",
        "{_warningIntroLacking} the capabilities required to support saves, so saves have been disabled for this session.",
    ),
    ("savesLabelAuto", "Autosave"),
    ("savesLabelDelete", "Delete"),
    ("savesLabelExport", "Save to Disk\u{2026}"),
    ("savesLabelImport", "Load from Disk\u{2026}"),
    ("savesLabelLoad", "Load"),
    ("savesLabelClear", "Delete All"),
    ("savesLabelSave", "Save"),
    ("savesLabelSlot", "Slot"),
    ("savesUnavailable", "No save slots found\u{2026}"),
    ("savesUnknownDate", "unknown"),
    // Settings.
    ("settingsTitle", "Settings"),
    ("settingsOff", "Off"),
    ("settingsOn", "On"),
    ("settingsReset", "Reset to Defaults"),
    // Restart.
    ("restartTitle", "Restart"),
    (
        "restartPrompt",
        "Are you sure that you want to restart? Unsaved progress will be lost.",
    ),
    // Share.
    ("shareTitle", "Share"),
    // Autoload.
    ("autoloadTitle", "Autoload"),
    ("autoloadCancel", "Go to start"),
    ("autoloadOk", "Load autosave"),
    ("autoloadPrompt", "An autosave exists. Load it now or go to the start?"),
    // Macros. Verbs: rewind, go back.
    ("macroBackText", "Back"),
    ("macroReturnText", "Return"),
];

/// The default English string table.
#[must_use]
pub fn default_table() -> StringTable {
    DEFAULT_STRINGS.iter().copied().collect()
}
