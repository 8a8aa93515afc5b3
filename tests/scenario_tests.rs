//! Reference scenarios for the checked FibonacciHeap API

use rust_fibonacci_heap::{EmptyHeapError, FibonacciHeap};

#[test]
fn test_peek_follows_inserts() {
    let mut heap = FibonacciHeap::new();
    assert_eq!(heap.size(), 0);

    heap.insert(10);
    assert_eq!(heap.size(), 1);
    assert_eq!(heap.peek_min(), Ok(&10));

    heap.insert(1);
    assert_eq!(heap.size(), 2);
    assert_eq!(heap.peek_min(), Ok(&1));

    heap.insert(100);
    assert_eq!(heap.size(), 3);
    assert_eq!(heap.peek_min(), Ok(&1));

    heap.insert(-1);
    assert_eq!(heap.size(), 4);
    assert_eq!(heap.peek_min(), Ok(&-1));
}

#[test]
fn test_extract_in_sorted_order() {
    let input = [5, 3, 6, 1, 4];
    let mut heap = FibonacciHeap::new();
    for value in input {
        heap.insert(value);
    }
    assert_eq!(heap.size(), input.len());

    for expected in [1, 3, 4, 5, 6] {
        assert_eq!(heap.extract_min(), Ok(expected));
    }
    assert_eq!(heap.size(), 0);
    assert_eq!(heap.extract_min(), Err(EmptyHeapError));
    assert_eq!(heap.size(), 0);
}

#[test]
fn test_empty_heap_fails_cleanly() {
    let mut heap: FibonacciHeap<i32> = FibonacciHeap::new();
    assert_eq!(heap.peek_min(), Err(EmptyHeapError));
    assert_eq!(heap.extract_min(), Err(EmptyHeapError));
    assert_eq!(heap.size(), 0);
}

#[test]
fn test_drain_and_refill() {
    let size = 10;
    let mut heap = FibonacciHeap::with_capacity(size);

    let drain_and_check = |heap: &mut FibonacciHeap<usize>| {
        for i in 0..size {
            assert_eq!(heap.size(), size - i);
            assert_eq!(heap.extract_min(), Ok(i));
        }
        assert!(heap.is_empty());
    };

    for i in 0..size {
        heap.insert(i);
    }
    drain_and_check(&mut heap);

    for i in (0..size).rev() {
        heap.insert(i);
    }
    drain_and_check(&mut heap);
}

#[test]
fn test_error_is_reportable() {
    let mut heap: FibonacciHeap<u8> = FibonacciHeap::default();
    let err = heap.extract_min().unwrap_err();
    assert_eq!(err.to_string(), "heap is empty");

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "heap is empty");
}

#[test]
fn test_extend_and_iterate() {
    let mut heap: FibonacciHeap<i32> = FibonacciHeap::new();
    heap.extend([3, 9, -4]);
    heap.extend(vec![0, 12]);

    assert_eq!(heap.size(), 5);
    assert_eq!(heap.peek_min(), Ok(&-4));
    assert_eq!(heap.iter().count(), 5);
    assert_eq!(heap.iter().max(), Some(&12));
}
