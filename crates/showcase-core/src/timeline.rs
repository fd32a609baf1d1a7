//! Scroll keyframe sequencing.
//!
//! A [`Timeline`] is an ordered, immutable list of [`Segment`]s. Each tick,
//! [`Timeline::play`] applies every segment whose half-open range
//! `[start, end)` contains the current scroll percent, in list order. Ranges
//! may overlap or leave gaps; a tick that matches nothing leaves the scene as
//! it was.

use crate::constants::{CONTINUITY_TOLERANCE, SECTION_COUNT};
use crate::error::{Result, ShowcaseError};
use crate::interp::{lerp, lerp_vec3, scale_percent};
use crate::state::{CameraPose, SceneState};
use glam::Vec3;
use smallvec::SmallVec;

/// Straight-line move of one camera channel across a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub from: Vec3,
    pub to: Vec3,
}

impl Track {
    #[inline]
    pub fn sample(&self, progress: f32) -> Vec3 {
        lerp_vec3(self.from, self.to, progress)
    }
}

/// A write to one section's opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpacityOp {
    /// Interpolate `from -> to` over the scroll sub-range `[start, end]`.
    /// Progress is not clamped; the stored opacity is.
    Fade {
        section: usize,
        from: f32,
        to: f32,
        start: f32,
        end: f32,
    },
    /// Pin the section to a fixed value.
    Hold { section: usize, value: f32 },
}

impl OpacityOp {
    pub fn section(&self) -> usize {
        match *self {
            OpacityOp::Fade { section, .. } | OpacityOp::Hold { section, .. } => section,
        }
    }

    pub fn value_at(&self, percent: f32) -> f32 {
        match *self {
            OpacityOp::Fade {
                from,
                to,
                start,
                end,
                ..
            } => lerp(from, to, scale_percent(percent, start, end)),
            OpacityOp::Hold { value, .. } => value,
        }
    }

    /// Value once the scroll has passed the end of the op.
    pub fn settled_value(&self) -> f32 {
        match *self {
            OpacityOp::Fade { to, .. } => to,
            OpacityOp::Hold { value, .. } => value,
        }
    }
}

/// One scroll-range-bound animation update.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub start: f32,
    pub end: f32,
    pub eye: Option<Track>,
    pub look_target: Option<Track>,
    pub opacity: SmallVec<[OpacityOp; 4]>,
}

impl Segment {
    pub fn new(label: &'static str, start: f32, end: f32) -> Self {
        Self {
            label,
            start,
            end,
            eye: None,
            look_target: None,
            opacity: SmallVec::new(),
        }
    }

    pub fn eye(mut self, from: Vec3, to: Vec3) -> Self {
        self.eye = Some(Track { from, to });
        self
    }

    pub fn look_at(mut self, from: Vec3, to: Vec3) -> Self {
        self.look_target = Some(Track { from, to });
        self
    }

    pub fn fade(mut self, section: usize, from: f32, to: f32, start: f32, end: f32) -> Self {
        self.opacity.push(OpacityOp::Fade {
            section,
            from,
            to,
            start,
            end,
        });
        self
    }

    pub fn hold(mut self, section: usize, value: f32) -> Self {
        self.opacity.push(OpacityOp::Hold { section, value });
        self
    }

    /// Half-open membership test: `start <= percent < end`.
    #[inline]
    pub fn contains(&self, percent: f32) -> bool {
        self.start <= percent && percent < self.end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub fn progress(&self, percent: f32) -> f32 {
        scale_percent(percent, self.start, self.end)
    }

    /// Camera pose at `progress` through the segment. Channels this segment
    /// does not animate keep their value from `prior`.
    pub fn camera_at(&self, progress: f32, prior: CameraPose) -> CameraPose {
        CameraPose {
            eye: self.eye.map_or(prior.eye, |t| t.sample(progress)),
            look_target: self
                .look_target
                .map_or(prior.look_target, |t| t.sample(progress)),
        }
    }

    /// Scene after this segment runs at `percent`, starting from `prior`.
    pub fn apply(&self, percent: f32, prior: SceneState) -> SceneState {
        let mut next = prior;
        next.camera = self.camera_at(self.progress(percent), prior.camera);
        for op in &self.opacity {
            next.sections.set(op.section(), op.value_at(percent));
        }
        next
    }

    /// Scene this segment leaves behind once scrolled past its end.
    pub fn settled(&self, prior: SceneState) -> SceneState {
        let mut next = prior;
        next.camera = self.camera_at(1.0, prior.camera);
        for op in &self.opacity {
            next.sections.set(op.section(), op.settled_value());
        }
        next
    }

    fn validate(&self) -> Result<()> {
        let range_ok = self.start.is_finite() && self.end.is_finite() && self.start <= self.end;
        if !range_ok {
            return Err(ShowcaseError::InvalidRange {
                label: self.label,
                start: self.start,
                end: self.end,
            });
        }
        if let Some(op) = self.opacity.iter().find(|op| op.section() >= SECTION_COUNT) {
            return Err(ShowcaseError::UnknownSection {
                label: self.label,
                section: op.section(),
                count: SECTION_COUNT,
            });
        }
        Ok(())
    }
}

/// Which camera channel a continuity break is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraChannel {
    Eye,
    LookTarget,
}

/// A segment whose animated channel does not start where the camera was left.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinuityBreak {
    pub previous: &'static str,
    pub segment: &'static str,
    pub channel: CameraChannel,
    pub expected: Vec3,
    pub found: Vec3,
}

/// Scroll percent and scene state carried between ticks.
#[derive(Clone, Debug)]
pub struct ScrollContext {
    percent: f32,
    state: SceneState,
}

impl ScrollContext {
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            percent: 0.0,
            state: timeline.initial_state(),
        }
    }

    /// Record the latest scroll percent. Non-finite input is dropped.
    pub fn set_percent(&mut self, percent: f32) {
        if percent.is_finite() {
            self.percent = percent;
        } else {
            log::warn!("ignoring non-finite scroll percent {percent}");
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Progress of the current percent through `[start, end]`.
    pub fn progress(&self, start: f32, end: f32) -> f32 {
        scale_percent(self.percent, start, end)
    }
}

/// Ordered, immutable segment list.
#[derive(Clone, Debug)]
pub struct Timeline {
    segments: Vec<Segment>,
    initial: SceneState,
}

impl Timeline {
    /// Validate `segments` and derive the opening scene.
    ///
    /// Zero-width segments at the head of the list never fire during
    /// dispatch; their settled state becomes the initial scene instead.
    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        for s in &segments {
            s.validate()?;
        }
        let initial = segments
            .iter()
            .take_while(|s| s.is_empty())
            .fold(SceneState::default(), |state, s| s.settled(state));
        let timeline = Self { segments, initial };
        for b in timeline.continuity_breaks(CONTINUITY_TOLERANCE) {
            log::warn!(
                "[timeline] `{}` starts {:?} at {} but `{}` left it at {}",
                b.segment,
                b.channel,
                b.found,
                b.previous,
                b.expected
            );
        }
        log::info!("[timeline] {} segments", timeline.segments.len());
        Ok(timeline)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn initial_state(&self) -> SceneState {
        self.initial
    }

    /// Segments whose range contains `percent`, in list order.
    pub fn active(&self, percent: f32) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(move |s| s.contains(percent))
    }

    /// Fold every matching segment over `prior`.
    pub fn dispatch(&self, percent: f32, prior: SceneState) -> SceneState {
        self.active(percent).fold(prior, |state, s| s.apply(percent, state))
    }

    /// Run one tick against `ctx` and return how many segments fired.
    pub fn play(&self, ctx: &mut ScrollContext) -> usize {
        let percent = ctx.percent;
        let mut fired = 0;
        for s in self.active(percent) {
            ctx.state = s.apply(percent, ctx.state);
            fired += 1;
        }
        fired
    }

    /// Walk the list in order and report every animated channel that does
    /// not start where the previous segments left the camera.
    pub fn continuity_breaks(&self, tolerance: f32) -> Vec<ContinuityBreak> {
        let mut breaks = Vec::new();
        let mut pose = self.initial.camera;
        let mut previous = self
            .segments
            .iter()
            .take_while(|s| s.is_empty())
            .last()
            .map_or("initial", |s| s.label);
        for s in self.segments.iter().skip_while(|s| s.is_empty()) {
            let channels = [
                (CameraChannel::Eye, s.eye, pose.eye),
                (CameraChannel::LookTarget, s.look_target, pose.look_target),
            ];
            for (channel, track, expected) in channels {
                if let Some(t) = track {
                    if !t.from.abs_diff_eq(expected, tolerance) {
                        breaks.push(ContinuityBreak {
                            previous,
                            segment: s.label,
                            channel,
                            expected,
                            found: t.from,
                        });
                    }
                }
            }
            pose = s.camera_at(1.0, pose);
            previous = s.label;
        }
        breaks
    }
}
