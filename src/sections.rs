use crate::constants::OPACITY_WRITE_EPSILON;
use showcase_core::{SectionOpacity, SECTION_COUNT};

/// Last opacity written to each section's DOM node.
///
/// Most frames leave every section where it was; only real changes are
/// written back so the page does not restyle sixty times a second.
#[derive(Clone, Debug, Default)]
pub struct OpacityCache {
    written: [Option<f32>; SECTION_COUNT],
}

impl OpacityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `write` for every section whose opacity moved since the last write.
    pub fn sync(&mut self, next: &SectionOpacity, mut write: impl FnMut(usize, f32)) -> usize {
        let mut writes = 0;
        for (i, v) in next.iter() {
            let stale = match self.written[i] {
                // endpoints always land exactly
                Some(prev) => {
                    prev != v
                        && ((prev - v).abs() > OPACITY_WRITE_EPSILON || v == 0.0 || v == 1.0)
                }
                None => true,
            };
            if stale {
                write(i, v);
                self.written[i] = Some(v);
                writes += 1;
            }
        }
        writes
    }

    pub fn last_written(&self, section: usize) -> Option<f32> {
        self.written.get(section).copied().flatten()
    }
}
