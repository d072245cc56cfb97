//! Handler für die Dokument-Navigation.

use crate::app::use_cases;
use crate::app::AppState;

/// Springt zum Dokument an `index` (0-basiert).
pub fn goto(state: &mut AppState, index: usize) {
    use_cases::navigation::goto_document(state, index);
}

/// Springt relativ um `delta` Dokumente.
pub fn jump(state: &mut AppState, delta: isize) {
    use_cases::navigation::jump_documents(state, delta);
}
