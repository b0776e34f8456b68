//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static banner display
    Hold,
    /// Banner sliding off the top
    SlideOut,
    Done,
}

#[derive(Debug)]
pub struct SplashState {
    started: Instant,
    pub phase: SplashPhase,
    /// Rows the banner has moved up
    pub scroll_offset: f32,
}

impl SplashState {
    const HOLD: Duration = Duration::from_millis(1100);
    const SLIDE: Duration = Duration::from_millis(700);

    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            phase: SplashPhase::Hold,
            scroll_offset: 0.0,
        }
    }

    /// Advance the animation using wall-clock time
    pub fn update(&mut self, terminal_height: u16) {
        self.advance(self.started.elapsed(), terminal_height);
    }

    fn advance(&mut self, elapsed: Duration, terminal_height: u16) {
        if self.is_complete() {
            return;
        }
        if elapsed < Self::HOLD {
            self.phase = SplashPhase::Hold;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::HOLD + Self::SLIDE {
            self.phase = SplashPhase::SlideOut;
            let progress = (elapsed - Self::HOLD).as_secs_f32() / Self::SLIDE.as_secs_f32();
            self.scroll_offset = simple_easing::cubic_out(progress) * f32::from(terminal_height);
        } else {
            self.phase = SplashPhase::Done;
        }
    }

    pub fn skip(&mut self) {
        self.phase = SplashPhase::Done;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Done
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}
