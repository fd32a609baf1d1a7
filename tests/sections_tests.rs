// Host-side tests for writing section opacities back to the page.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod sections {
    include!("../src/sections.rs");
}

use rand::prelude::*;
use sections::OpacityCache;
use showcase_core::{product_tour, SectionOpacity, ScrollContext, SECTION_COUNT};

fn collect(cache: &mut OpacityCache, next: &SectionOpacity) -> Vec<(usize, f32)> {
    let mut out = Vec::new();
    let n = cache.sync(next, |i, v| out.push((i, v)));
    assert_eq!(n, out.len());
    out
}

#[test]
fn first_sync_writes_every_section() {
    let mut cache = OpacityCache::new();
    let writes = collect(&mut cache, &SectionOpacity::HIDDEN);
    assert_eq!(writes.len(), SECTION_COUNT);
    assert!(collect(&mut cache, &SectionOpacity::HIDDEN).is_empty());
}

#[test]
fn only_changed_sections_are_written() {
    let mut cache = OpacityCache::new();
    let mut s = SectionOpacity::HIDDEN;
    collect(&mut cache, &s);

    s.set(3, 0.5);
    assert_eq!(collect(&mut cache, &s), vec![(3, 0.5)]);
    // sub-epsilon jitter is skipped
    s.set(3, 0.50001);
    assert!(collect(&mut cache, &s).is_empty());
    assert_eq!(cache.last_written(3), Some(0.5));
}

#[test]
fn endpoints_are_always_written_exactly() {
    let mut cache = OpacityCache::new();
    let mut s = SectionOpacity::HIDDEN;
    s.set(1, 0.99995);
    collect(&mut cache, &s);
    s.set(1, 1.0);
    assert_eq!(collect(&mut cache, &s), vec![(1, 1.0)]);
    s.set(1, 0.00003);
    collect(&mut cache, &s);
    s.set(1, 0.0);
    assert_eq!(collect(&mut cache, &s), vec![(1, 0.0)]);
}

#[test]
fn dom_tracks_the_tour_within_epsilon() {
    let timeline = product_tour().expect("tour");
    let mut ctx = ScrollContext::new(&timeline);
    let mut cache = OpacityCache::new();
    let mut dom = [f32::NAN; SECTION_COUNT];
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..2000 {
        ctx.set_percent(rng.gen_range(0.0..101.0));
        timeline.play(&mut ctx);
        cache.sync(&ctx.state().sections, |i, v| dom[i] = v);
        for (i, v) in ctx.state().sections.iter() {
            assert!(
                (dom[i] - v).abs() <= constants::OPACITY_WRITE_EPSILON,
                "section {i}: dom {} vs {v}",
                dom[i]
            );
        }
    }
}
