//! Pure rendering helpers for cifra sheets: chord highlighting, YouTube links and
//! the auto-scroll controller. Nothing here does I/O, so the same code runs in the
//! browser and on the server.

pub mod chords;
pub mod scroll;
pub mod video;

pub use chords::{annotate, is_chord_line, render_html};
pub use scroll::{AutoScroll, Tick, Viewport};
