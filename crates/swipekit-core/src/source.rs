//! Input-source capability selection.
//!
//! The transport tells the recognizer once, at attach time, which event
//! sources the environment offers. The recognizer picks one and from then
//! on only cares about one derived property: whether the source reports
//! discrete simultaneous contacts. The state machine never branches on
//! input technology.

use std::fmt;

/// An available input technology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceCapability {
    Touch,
    Pointer,
    Mouse,
}

impl SourceCapability {
    /// Whether this source delivers discrete per-contact samples. Pointer
    /// and mouse feeds are treated as single-contact streams.
    pub fn counts_contacts(self) -> bool {
        matches!(self, SourceCapability::Touch)
    }
}

/// Errors surfaced once, at attach time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// The environment offers none of the expected contact-event sources.
    NoSupportedSource,
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachError::NoSupportedSource => {
                write!(f, "no supported contact event source available")
            }
        }
    }
}

impl std::error::Error for AttachError {}

/// Picks the input source to drive the recognizer: pointer events when
/// available, then touch, then mouse — the mouse fallback only when
/// enabled.
pub fn select_source(
    available: &[SourceCapability],
    fallback_to_mouse_events: bool,
) -> Result<SourceCapability, AttachError> {
    let has = |cap| available.contains(&cap);

    if has(SourceCapability::Pointer) {
        Ok(SourceCapability::Pointer)
    } else if has(SourceCapability::Touch) {
        Ok(SourceCapability::Touch)
    } else if has(SourceCapability::Mouse) && fallback_to_mouse_events {
        Ok(SourceCapability::Mouse)
    } else {
        Err(AttachError::NoSupportedSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_preferred_over_touch_and_mouse() {
        let all = [
            SourceCapability::Mouse,
            SourceCapability::Touch,
            SourceCapability::Pointer,
        ];
        assert_eq!(select_source(&all, true), Ok(SourceCapability::Pointer));
    }

    #[test]
    fn mouse_fallback_is_opt_in() {
        let mouse_only = [SourceCapability::Mouse];
        assert_eq!(
            select_source(&mouse_only, true),
            Ok(SourceCapability::Mouse)
        );
        assert_eq!(
            select_source(&mouse_only, false),
            Err(AttachError::NoSupportedSource)
        );
    }

    #[test]
    fn empty_capability_set_errors() {
        assert_eq!(select_source(&[], true), Err(AttachError::NoSupportedSource));
    }

    #[test]
    fn only_touch_counts_contacts() {
        assert!(SourceCapability::Touch.counts_contacts());
        assert!(!SourceCapability::Pointer.counts_contacts());
        assert!(!SourceCapability::Mouse.counts_contacts());
    }
}
