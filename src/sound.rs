use std::io::{IsTerminal, Write};

/// Audible feedback for eating, made by ringing the terminal bell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bell;

impl Bell {
    /// Return a `Bell` if sound is `enabled` and stdout is a terminal that
    /// can hear it
    pub(crate) fn open(enabled: bool) -> Option<Bell> {
        (enabled && std::io::stdout().is_terminal()).then_some(Bell)
    }

    /// Ring the bell.  Write failures are ignored; the game carries on
    /// silently.
    pub(crate) fn ring(self) {
        let mut stdout = std::io::stdout();
        if stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush())
            .is_err()
        {
            log::debug!("Failed to ring terminal bell");
        }
    }
}
