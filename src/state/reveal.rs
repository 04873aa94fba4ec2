//! One-shot reveal of content blocks as they scroll into view

use std::time::{Duration, Instant};

/// Duration of the fade-in once a block is revealed
pub const FADE_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    ServiceCard,
    DoctorCard,
    Stat,
    AboutText,
    ContactForm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealBlock {
    pub kind: BlockKind,
    pub top: u16,
    pub height: u16,
    pub revealed_at: Option<Instant>,
}

impl RevealBlock {
    pub fn new(kind: BlockKind, top: u16, height: u16) -> Self {
        Self {
            kind,
            top,
            height,
            revealed_at: None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Fraction of this block inside the rows `[start, end)`
    pub fn visible_ratio(&self, start: u16, end: u16) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        let bottom = self.top.saturating_add(self.height);
        let overlap = bottom.min(end).saturating_sub(self.top.max(start));
        f32::from(overlap) / f32::from(self.height)
    }

    /// Eased fade-in progress, 0.0 when hidden and 1.0 once settled
    pub fn fade_progress(&self, now: Instant) -> f32 {
        match self.revealed_at {
            None => 0.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                let linear = (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0);
                simple_easing::cubic_out(linear)
            }
        }
    }
}

/// Watches a fixed set of blocks and marks each revealed the first time enough
/// of it is inside the viewport. Reveals never revert.
#[derive(Debug, Clone)]
pub struct ScrollRevealObserver {
    blocks: Vec<RevealBlock>,
    threshold: f32,
    bottom_margin: u16,
}

impl ScrollRevealObserver {
    pub fn new(blocks: Vec<RevealBlock>, threshold: f32, bottom_margin: u16) -> Self {
        Self {
            blocks,
            threshold,
            bottom_margin,
        }
    }

    /// Check every unrevealed block against the viewport; returns how many were newly revealed
    pub fn observe(&mut self, scroll: u16, viewport_height: u16, now: Instant) -> usize {
        let start = scroll;
        let end = scroll.saturating_add(viewport_height.saturating_sub(self.bottom_margin));
        let threshold = self.threshold;

        let mut revealed = 0;
        for block in self.blocks.iter_mut().filter(|b| !b.is_revealed()) {
            let ratio = block.visible_ratio(start, end);
            if ratio > 0.0 && ratio >= threshold {
                block.revealed_at = Some(now);
                revealed += 1;
            }
        }
        if revealed > 0 {
            tracing::debug!("Revealed {revealed} block(s) at scroll {scroll}");
        }
        revealed
    }

    pub fn blocks(&self) -> &[RevealBlock] {
        &self.blocks
    }

    /// Fade progress of the block of `kind` covering `row`, 1.0 if no block is there
    pub fn progress_at(&self, kind: BlockKind, row: u16, now: Instant) -> f32 {
        self.blocks
            .iter()
            .find(|b| b.kind == kind && row >= b.top && row < b.top + b.height)
            .map(|b| b.fade_progress(now))
            .unwrap_or(1.0)
    }

    /// True while any revealed block is still fading in
    pub fn is_animating(&self, now: Instant) -> bool {
        self.blocks.iter().any(|b| {
            b.revealed_at
                .is_some_and(|at| now.saturating_duration_since(at) < FADE_DURATION)
        })
    }
}
