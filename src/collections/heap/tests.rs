#![cfg(test)]

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::EmptyContainer;

#[test]
fn test_default_ordering_scenario() {
    let mut queue = PriorityQueue::new();
    for value in [3, 1, 4, 1] {
        queue.push(value);
        queue.verify_heap_order();
    }

    assert_eq!(queue.top(), Ok(&4), "The greatest element should be at the top.");
    assert_eq!(queue.len(), 4);

    let mut popped = Vec::new();
    while let Ok(value) = queue.pop() {
        queue.verify_heap_order();
        popped.push(value);
    }
    assert_eq!(popped, [4, 3, 1, 1], "Elements should be popped greatest first.");
}

#[test]
fn test_empty_queue_errors() {
    let mut queue = PriorityQueue::<u32>::new();
    assert_eq!(queue.pop(), Err(EmptyContainer));
    assert_eq!(queue.top(), Err(EmptyContainer));
    assert_eq!(queue.len(), 0, "Failed operations shouldn't change the length.");

    queue.push(1);
    assert_eq!(queue.pop(), Ok(1));
    assert_eq!(queue.pop(), Err(EmptyContainer));
    assert!(queue.is_empty());
}

#[test]
fn test_matches_reference_heap() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut queue = PriorityQueue::new();
    let mut reference = BinaryHeap::new();

    for _ in 0..2_000 {
        if rng.gen_bool(0.6) {
            let value = rng.gen_range(0..100_u32);
            queue.push(value);
            reference.push(value);
        } else {
            assert_eq!(queue.pop().ok(), reference.pop());
        }
        queue.verify_heap_order();
        assert_eq!(queue.len(), reference.len());
        assert_eq!(queue.top().ok(), reference.peek());
    }
}

#[test]
fn test_round_trip_multiset() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut values = (0..500).map(|_| rng.gen_range(-20..20_i64)).collect::<Vec<_>>();

    let queue = values.iter().copied().collect::<PriorityQueue<_>>();
    assert_eq!(queue.len(), values.len());

    let popped = queue.into_iter_sorted().collect::<Vec<_>>();
    assert!(
        popped.windows(2).all(|pair| pair[0] >= pair[1]),
        "Pops should come out in non-increasing order."
    );

    values.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(popped, values, "Every pushed element should be popped exactly once.");
}

#[test]
fn test_min_first_ordering() {
    let mut queue = PriorityQueue::with_ordering(MinFirst);
    queue.extend(["pear", "apple", "fig", "banana"]);
    queue.verify_heap_order();

    assert_eq!(queue.top(), Ok(&"apple"));
    assert_eq!(
        queue.into_iter_sorted().collect::<Vec<_>>(),
        ["apple", "banana", "fig", "pear"],
        "MinFirst should retrieve the lexicographically least string first."
    );

    let queue: PriorityQueue<_, MinFirst> = PriorityQueue::from([5, 2, 8]);
    assert_eq!(queue.into_iter_sorted().collect::<Vec<_>>(), [2, 5, 8]);
}

#[test]
fn test_custom_ordering_is_used_throughout() {
    #[derive(Debug, PartialEq)]
    struct Job {
        priority: u8,
        name: &'static str,
    }

    let by_priority = |a: &Job, b: &Job| a.priority > b.priority;
    let jobs = [
        Job { priority: 2, name: "write" },
        Job { priority: 9, name: "urgent" },
        Job { priority: 5, name: "read" },
        Job { priority: 1, name: "idle" },
        Job { priority: 7, name: "flush" },
    ];

    let mut queue = PriorityQueue::from_iter_with(jobs, by_priority);
    queue.verify_heap_order();
    assert_eq!(queue.top().map(|job| job.name), Ok("urgent"));

    assert_eq!(queue.pop().map(|job| job.name), Ok("urgent"));
    queue.push(Job { priority: 6, name: "sync" });
    queue.verify_heap_order();

    assert_eq!(
        queue.into_iter_sorted().map(|job| job.name).collect::<Vec<_>>(),
        ["flush", "sync", "read", "write", "idle"],
        "The provided ordering should be applied by both sift up and sift down."
    );

    let mut reversed = PriorityQueue::with_ordering(|a: &Reverse<i32>, b: &Reverse<i32>| a > b);
    reversed.extend([3, -1, 7].map(Reverse));
    assert_eq!(reversed.pop(), Ok(Reverse(-1)), "Wrapped values shouldn't need special casing.");
}

#[test]
fn test_clear_and_clone() {
    let counter = CountedDrop::new(0);
    let mut queue = PriorityQueue::with_ordering(|_: &CountedDrop, _: &CountedDrop| false);
    for _ in 0..4 {
        queue.push(counter.clone());
    }
    queue.clear();
    assert_eq!(counter.count(), 4, "Clearing should drop every element.");
    assert!(queue.is_empty());
    assert_eq!(queue.top().err(), Some(EmptyContainer));

    let original = PriorityQueue::<_>::from([1, 5, 3]);
    let mut copy = original.clone();
    copy.push(10);
    assert_eq!(original.top(), Ok(&5), "Pushing onto a clone shouldn't affect the original.");
    assert_eq!(copy.top(), Ok(&10));
    assert_eq!(original.len(), 3);
}

#[test]
fn test_formatting() {
    let queue = PriorityQueue::<_>::from([1, 2, 3]);
    let rendered = queue.to_string();
    assert!(rendered.starts_with("PriorityQueue[3, "), "The top should be rendered first.");
    assert!(rendered.contains('1') && rendered.contains('2'));
    assert_eq!(PriorityQueue::<u8>::new().to_string(), "PriorityQueue[]");
    assert_eq!(
        format!("{:?}", PriorityQueue::<_>::from([7])),
        "PriorityQueue { storage: [7], len: 1 }"
    );
}

#[test]
fn test_size_queries_are_const() {
    const fn size_of_queue<C: Compare<u8>>(queue: &PriorityQueue<u8, C>) -> (usize, bool) {
        (queue.len(), queue.is_empty())
    }

    assert_eq!(size_of_queue(&PriorityQueue::new()), (0, true));
    assert_eq!(size_of_queue(&PriorityQueue::<_>::from([4, 8])), (2, false));
}
