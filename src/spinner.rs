const FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Cursor into the spinner's cyclic frame set. Owned by whoever
/// drives the animation and passed into `Render::tick`; there is no
/// process-wide spinner state.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current glyph and advances one frame. Advancing a
    /// full period lands back on the starting glyph.
    pub fn next(&mut self) -> char {
        let glyph = FRAMES[self.frame];
        self.frame = (self.frame + 1) % FRAMES.len();
        glyph
    }

    /// Number of frames before the sequence repeats.
    pub fn period() -> usize {
        FRAMES.len()
    }
}
