/// Slide index for the project showcase, with wrap-around and autoplay.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    interval: f64,
    paused: bool,
    /// Time the current slide became visible; `None` until the first tick.
    shown_at: Option<f64>,
}

impl Carousel {
    pub fn new(len: usize, interval: f64) -> Self {
        Self {
            len,
            index: 0,
            interval,
            paused: false,
            shown_at: None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.shown_at = None;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.shown_at = None;
        self.index
    }

    /// Jump to `index`; out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
            self.shown_at = None;
        }
        self.index
    }

    /// Autoplay step. Advances at most one slide per call, once the current
    /// slide has been shown for `interval` seconds. Returns whether it moved.
    pub fn tick(&mut self, now: f64) -> bool {
        let shown_at = *self.shown_at.get_or_insert(now);
        if self.paused || self.len < 2 || now - shown_at < self.interval {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        self.shown_at = Some(now);
        true
    }

    /// Horizontal offset of the slide track, in percent.
    pub fn offset_percent(&self) -> f32 {
        -(self.index as f32) * 100.0
    }
}
