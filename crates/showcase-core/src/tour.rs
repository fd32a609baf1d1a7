//! The product tour: where the camera goes as the page scrolls.
//!
//! Each stop flies the camera from the previous product to the next one and
//! cross-fades the matching text sections. Gaps between stops hold the last
//! shot while the reader finishes a section.

use crate::constants::{
    FADE_IN_SPAN, FADE_OUT_SPAN, INITIAL_EYE, INITIAL_LOOK_TARGET, SECTION_COUNT,
};
use crate::error::Result;
use crate::timeline::{Segment, Timeline};
use glam::Vec3;

/// One camera stop: the pose the camera arrives at.
struct Stop {
    label: &'static str,
    start: f32,
    end: f32,
    eye: Vec3,
    look_target: Vec3,
}

const FAN_EYE: Vec3 = Vec3::new(0.385, 0.85, 0.35);
const FAN_LOOK: Vec3 = Vec3::new(0.385, 0.85, 0.35);
const FAN_PULLBACK_EYE: Vec3 = Vec3::new(0.385, 0.85, 0.5);

// Stops after the juicer pull-back, in scroll order. `STOPS[i]` fades in
// section `i + 2`.
const STOPS: [Stop; 10] = [
    Stop {
        label: "juicer",
        start: 12.0,
        end: 19.0,
        eye: Vec3::new(-0.65, 0.9, 0.45),
        look_target: Vec3::new(-0.5, 0.865, 0.1),
    },
    Stop {
        label: "record player",
        start: 21.0,
        end: 28.0,
        eye: Vec3::new(0.375, -0.05, 0.9),
        look_target: Vec3::new(0.375, -0.15, 0.35),
    },
    Stop {
        label: "calculator",
        start: 30.0,
        end: 37.0,
        eye: Vec3::new(1.2, 0.0, 0.25),
        look_target: Vec3::new(1.45, -2.5, 0.0),
    },
    Stop {
        label: "clock",
        start: 39.0,
        end: 46.0,
        eye: Vec3::new(1.05, -0.12, 0.2),
        look_target: Vec3::new(0.25, -0.1625, -5.0),
    },
    Stop {
        label: "large speakers",
        start: 48.0,
        end: 55.0,
        eye: Vec3::new(-1.0, 0.3, 1.05),
        look_target: Vec3::new(-3.6, -0.25, -4.0),
    },
    Stop {
        label: "tp 1",
        start: 57.0,
        end: 64.0,
        eye: Vec3::new(-0.68, -0.01, 0.48),
        look_target: Vec3::new(-0.68, -0.01, 0.25),
    },
    Stop {
        label: "radio",
        start: 66.0,
        end: 73.0,
        eye: Vec3::new(-0.25, -0.08, 0.37),
        look_target: Vec3::new(-0.25, -0.08, -0.25),
    },
    Stop {
        label: "razor",
        start: 75.0,
        end: 82.0,
        eye: Vec3::new(0.57, 0.37, 0.21),
        look_target: Vec3::new(0.625, 0.348, 0.1),
    },
    Stop {
        label: "coffee grinder",
        start: 84.0,
        end: 91.0,
        eye: Vec3::new(-0.72, 0.95, 0.2),
        look_target: Vec3::new(-0.77, 0.86, 0.1),
    },
    Stop {
        label: "shelf",
        start: 93.0,
        end: 100.0,
        eye: INITIAL_EYE,
        look_target: INITIAL_LOOK_TARGET,
    },
];

/// Segment list for the full tour, in dispatch order.
pub fn product_tour_segments() -> Vec<Segment> {
    let mut segments = Vec::with_capacity(STOPS.len() + 4);

    segments.push(
        Segment::new("initial view", 0.0, 0.0)
            .eye(INITIAL_EYE, INITIAL_EYE)
            .look_at(INITIAL_LOOK_TARGET, INITIAL_LOOK_TARGET)
            .hold(0, 1.0),
    );

    segments.push(
        Segment::new("fan", 0.0, 8.0)
            .look_at(INITIAL_LOOK_TARGET, FAN_LOOK)
            .eye(INITIAL_EYE, FAN_EYE)
            .fade(0, 1.0, 0.0, 0.0, FADE_OUT_SPAN)
            .fade(1, 0.0, 1.0, 8.0 - FADE_IN_SPAN, 8.0),
    );

    // Back off the fan before swinging over to the juicer; the aim stays put.
    segments.push(
        Segment::new("juicer approach", 10.0, 12.0)
            .look_at(FAN_LOOK, FAN_LOOK)
            .eye(FAN_EYE, FAN_PULLBACK_EYE)
            .hold(0, 0.0)
            .fade(1, 1.0, 0.0, 10.0, 12.0),
    );

    let mut eye = FAN_PULLBACK_EYE;
    let mut look = FAN_LOOK;
    for (i, stop) in STOPS.iter().enumerate() {
        let section = i + 2;
        let mut seg = Segment::new(stop.label, stop.start, stop.end)
            .look_at(look, stop.look_target)
            .eye(eye, stop.eye);
        // The juicer stop takes over from a fade that already finished.
        seg = if i == 0 {
            seg.hold(section - 1, 0.0)
        } else {
            seg.hold(section - 2, 0.0).fade(
                section - 1,
                1.0,
                0.0,
                stop.start,
                stop.start + FADE_OUT_SPAN,
            )
        };
        let fade_in_span = if section + 1 == SECTION_COUNT {
            FADE_OUT_SPAN
        } else {
            FADE_IN_SPAN
        };
        seg = seg.fade(section, 0.0, 1.0, stop.end - fade_in_span, stop.end);
        segments.push(seg);
        eye = stop.eye;
        look = stop.look_target;
    }

    // Pins the final frame even when a jump skipped the stops before it.
    let last = SECTION_COUNT - 1;
    let settle = (0..last).fold(Segment::new("settle", 100.0, 101.0), |seg, s| {
        seg.hold(s, 0.0)
    });
    segments.push(settle.hold(last, 1.0));

    segments
}

/// Build the product tour timeline.
pub fn product_tour() -> Result<Timeline> {
    Timeline::new(product_tour_segments())
}
