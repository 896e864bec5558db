use super::*;
use crate::chain::{ChainError, RESERVED_INT};

#[test]
fn test_stack_lifo() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);

    for i in 1..=3 {
        stack.push(i).unwrap();
    }

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek(), Some(&3));
    assert_eq!(stack.to_string(), "3 2 1");
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.to_string(), "Empty stack.");
}

#[test]
fn test_stack_rejects_marker() {
    let mut stack = Stack::new();
    stack.push(7).unwrap();

    assert_eq!(stack.push(RESERVED_INT), Err(ChainError::ReservedKey));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![7]);
}

#[test]
fn test_queue_fifo() {
    let mut queue = Queue::new();
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.to_string(), "Empty queue.");

    for i in 1..=3 {
        queue.enqueue(i).unwrap();
    }

    assert_eq!(queue.peek(), Some(&1));
    assert_eq!(queue.to_string(), "1 2 3");
    assert_eq!(queue.dequeue(), Some(1));

    queue.enqueue(4).unwrap();
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(4));
    assert!(queue.is_empty());
}

#[test]
fn test_queue_rejects_marker() {
    let mut queue = Queue::new();
    assert_eq!(queue.enqueue(i32::MAX), Err(ChainError::ReservedKey));
    assert!(queue.is_empty());
}

#[test]
fn test_queue_interleaved_reuses_slots() {
    let mut queue = Queue::new();
    for round in 0..1000 {
        queue.enqueue(round).unwrap();
        queue.enqueue(round + 1).unwrap();
        // enqueue order is 0, 1, 1, 2, 2, 3, ...
        assert_eq!(queue.dequeue(), Some((round + 1) / 2));
    }
    assert_eq!(queue.len(), 1000);
}

#[test]
fn test_string_stack() {
    let mut stack: Stack<String> = Stack::new();
    stack.push("bottom".to_string()).unwrap();
    stack.push("top".to_string()).unwrap();
    assert_eq!(
        stack.push("SENTINEL".to_string()),
        Err(ChainError::ReservedKey)
    );
    assert_eq!(stack.pop().as_deref(), Some("top"));
}

#[test]
fn test_int_list_find_remove() {
    let mut list = IntList::new();
    for value in [5, 10, 15] {
        list.insert(value).unwrap();
    }

    let node = list.find(&10).unwrap().unwrap();
    assert_eq!(list.remove(node), Ok(10));
    assert_eq!(list.to_string(), "15 5");
    assert_eq!(list.find(&10), Ok(None));
}
