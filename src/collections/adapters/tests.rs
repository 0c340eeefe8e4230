#![cfg(test)]

use super::*;
use crate::collections::traits::Container;
use crate::util::error::EmptyContainer;

#[test]
fn test_stack_is_lifo() {
    let mut stack = Stack::from([1, 2, 3]);
    stack.push(4);

    assert_eq!(stack.top(), Ok(&4), "The last pushed element should be on top.");
    assert_eq!(stack.len(), 4);

    *stack.top_mut().expect("stack isn't empty") = 40;
    assert_eq!(stack.pop(), Ok(40));
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.pop(), Err(EmptyContainer));
    assert_eq!(stack.top(), Err(EmptyContainer));
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_queue_is_fifo() {
    let mut queue = Queue::from([1, 2, 3]);
    queue.push(4);

    assert_eq!(queue.front(), Ok(&1), "The oldest element should be at the front.");
    assert_eq!(queue.back(), Ok(&4), "The newest element should be at the back.");

    assert_eq!(queue.pop(), Ok(1));
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.pop(), Ok(2));
    assert_eq!(queue.pop(), Ok(3));
    assert_eq!(queue.pop(), Ok(4));
    assert_eq!(queue.pop(), Err(EmptyContainer));
    assert_eq!(queue.front(), Err(EmptyContainer));
    assert_eq!(queue.back(), Err(EmptyContainer));
}

#[test]
fn test_clone_is_deep() {
    let stack = Stack::from([String::from("a")]);
    let mut stack_copy = stack.clone();
    stack_copy.push(String::from("b"));
    assert_eq!(stack.len(), 1, "Pushing onto a cloned Stack shouldn't affect the original.");
    assert_ne!(stack, stack_copy);

    let queue = Queue::from([1, 2]);
    let mut queue_copy = queue.clone();
    assert_eq!(queue, queue_copy);
    assert_eq!(queue_copy.pop(), Ok(1));
    assert_eq!(queue.front(), Ok(&1), "Popping from a cloned Queue shouldn't affect the original.");
}

#[test]
fn test_container_trait() {
    fn drain_len<C: Container>(container: &mut C) -> usize {
        let len = container.len();
        container.clear();
        assert!(container.is_empty(), "Clearing through the trait should empty the container.");
        len
    }

    assert_eq!(drain_len(&mut Stack::from([1, 2, 3])), 3);
    assert_eq!(drain_len(&mut Queue::from(['a', 'b'])), 2);
    assert_eq!(drain_len(&mut crate::collections::linked::LinkedList::from([0.5])), 1);
    #[cfg(feature = "heap")]
    assert_eq!(drain_len(&mut crate::collections::heap::PriorityQueue::<_>::from([4, 2])), 2);
}

#[test]
fn test_formatting() {
    let stack = Stack::from([1, 2, 3]);
    assert_eq!(stack.to_string(), "Stack[3, 2, 1]", "Stacks should render from the top.");
    assert_eq!(format!("{stack:?}"), "Stack { top_first: [3, 2, 1], len: 3 }");

    let queue = Queue::from([1, 2, 3]);
    assert_eq!(queue.to_string(), "Queue[1, 2, 3]", "Queues should render from the front.");
    assert_eq!(Queue::<u8>::new().to_string(), "Queue[]");
}
