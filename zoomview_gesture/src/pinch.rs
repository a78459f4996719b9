// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch (scale gesture) recognition.
//!
//! A pinch is in progress while two or more pointers are down. Its span is
//! twice the mean distance of the pointers from their centroid, so for two
//! fingers it is simply the distance between them. Each move reports the
//! ratio of the new span to the previous one, together with the centroid as
//! the focal point.
//!
//! When the set of pointers changes mid-pinch the span jumps; the current
//! pinch is ended and a new one begun from the new span so that no spurious
//! factor is reported.

use kurbo::Point;
use smallvec::SmallVec;

use crate::{GestureIntent, Intents, TouchPhase, TouchSample};

/// State of the pinch recognizer across samples.
#[derive(Clone, Debug, Default)]
pub struct PinchState {
    pointer_ids: SmallVec<[u64; 4]>,
    previous_span: f64,
    in_progress: bool,
}

impl PinchState {
    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Feeds a sample and appends any scale intents to `out`.
    pub fn on_sample(&mut self, sample: &TouchSample, out: &mut Intents) {
        let ending = matches!(sample.phase, TouchPhase::Up | TouchPhase::Cancel);
        if ending || sample.pointer_count() < 2 {
            self.end(out);
            return;
        }
        let Some(focus) = sample.centroid() else {
            return;
        };
        let span = span(sample, focus);

        let same_pointers = self.pointer_ids.len() == sample.pointer_count()
            && self
                .pointer_ids
                .iter()
                .zip(sample.pointers.iter())
                .all(|(id, p)| *id == p.id);

        if self.in_progress && !same_pointers {
            self.end(out);
        }
        if !self.in_progress {
            if span > 0.0 {
                self.begin(sample, focus, span, out);
            }
            return;
        }

        if span > 0.0 && self.previous_span > 0.0 {
            out.push(GestureIntent::Scale {
                factor: span / self.previous_span,
                focus,
            });
        }
        self.previous_span = span;
    }

    fn begin(&mut self, sample: &TouchSample, focus: Point, span: f64, out: &mut Intents) {
        self.pointer_ids = sample.pointers.iter().map(|p| p.id).collect();
        self.previous_span = span;
        self.in_progress = true;
        log::trace!("pinch begin with {} pointers, span {span}", self.pointer_ids.len());
        out.push(GestureIntent::ScaleBegin { focus });
    }

    fn end(&mut self, out: &mut Intents) {
        if self.in_progress {
            log::trace!("pinch end");
            out.push(GestureIntent::ScaleEnd);
        }
        *self = Self::default();
    }
}

fn span(sample: &TouchSample, focus: Point) -> f64 {
    let total: f64 = sample
        .pointers
        .iter()
        .map(|p| (p.position - focus).hypot())
        .sum();
    2.0 * total / sample.pointer_count() as f64
}
