//! Checks that syntax trees and parse errors own every allocation made while
//! parsing, so dropping them returns the heap to where it started.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use calcline::parse;

struct CountingAllocator;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn adjust(delta: isize) {
    // Ignored while the thread-local is being torn down.
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

fn live_allocations() -> isize {
    LIVE.with(Cell::get)
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        adjust(1);
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        adjust(-1);
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

#[test]
fn dropping_a_tree_frees_everything() {
    let source = "sum(1, 10, sqrt(i) * -(i ^ 2 + rootn(27, 3))) / log(100)";
    let before = live_allocations();

    let expr = parse(source).unwrap();
    assert!(live_allocations() > before);
    assert_eq!(expr.node_count(), 21);

    drop(expr);
    assert_eq!(live_allocations(), before);
}

#[test]
fn failed_parses_leave_nothing_behind() {
    for source in ["sqrt(1 + (2 * 3)", "1 + * 2", "sum(1, 2, i) 3", "rootn(8, 3,"] {
        let before = live_allocations();

        let error = parse(source).unwrap_err();
        drop(error);

        assert_eq!(live_allocations(), before, "leak after parsing '{source}'");
    }
}
