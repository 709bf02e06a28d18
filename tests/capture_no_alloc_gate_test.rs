use std::alloc::{GlobalAlloc, Layout, System};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_echoword::core::{CatalogManifest, GameSnapshot, GameState, ManualSound, WordCatalog};
use tui_echoword::types::{Difficulty, Phase};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn capture_tick_and_snapshot_are_allocation_free() {
    let mut manifest = CatalogManifest::standard();
    manifest.words = vec!["1234567890987234102831".to_string()];
    let mut sound = ManualSound::instant();
    let catalog = WordCatalog::load(&manifest, Path::new("assets"), &mut sound).unwrap();
    let mut gs = GameState::new(catalog, sound);
    gs.start();
    gs.handle_difficulty_select(Difficulty::Hard);
    while gs.phase() != Phase::Capture {
        gs.update(0.016);
    }

    // Warm-up sizes the snapshot's letter buffer.
    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            if i % 10 == 0 {
                gs.handle_character_input('z');
            }
            gs.update(0.016);
            gs.snapshot_into(&mut snap);
        }
    });

    assert_eq!(allocs, 0);
    assert_eq!(gs.mistakes(), 20);
}
