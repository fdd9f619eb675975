use fifo::{
    algo::{merge, recursive, search},
    queue::{BoundedQueue, LinkedQueue, Queue, QueueError},
};
use proptest::prelude::*;

fn values<Q: Queue<i32>>(queue: &Q) -> Vec<i32> {
    queue.iter().copied().collect()
}

fn bounded(values: &[i32]) -> BoundedQueue<i32> {
    let mut queue = BoundedQueue::new(values.len().max(1)).unwrap();
    for &v in values {
        queue.enqueue(v).unwrap();
    }
    queue
}

#[derive(Clone, Debug)]
enum Op {
    Enqueue(i32),
    Dequeue,
    Peek,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Enqueue),
        Just(Op::Dequeue),
        Just(Op::Peek),
    ]
}

/// Replays `ops` against `queue` and a `Vec` model, checking they agree
/// after every step.
fn check_against_model<Q: Queue<i32>>(mut queue: Q, capacity: Option<usize>, ops: &[Op]) {
    let mut model: Vec<i32> = Vec::new();
    for op in ops {
        match *op {
            Op::Enqueue(v) => {
                let full = capacity.map_or(false, |c| model.len() == c);
                match queue.enqueue(v) {
                    Ok(()) => {
                        assert!(!full);
                        model.push(v);
                    }
                    Err(err) => {
                        assert!(full);
                        assert_eq!(v, err.into_inner());
                    }
                }
            }
            Op::Dequeue => {
                let expected = if model.is_empty() {
                    Err(QueueError::Empty)
                } else {
                    Ok(model.remove(0))
                };
                assert_eq!(expected, queue.dequeue());
            }
            Op::Peek => {
                assert_eq!(model.first().ok_or(QueueError::Empty), queue.peek());
            }
        }
        assert_eq!(model.len(), queue.len());
        assert_eq!(queue.is_empty(), queue.len() == 0);
        assert_eq!(model, values(&queue));
    }
}

proptest! {
    #[test]
    fn fifo_law(input in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut linked = LinkedQueue::new();
        let mut ring = BoundedQueue::new(64).unwrap();
        for &v in &input {
            linked.enqueue(v).unwrap();
            ring.enqueue(v).unwrap();
        }
        let from_linked: Vec<_> = input.iter().map(|_| linked.dequeue().unwrap()).collect();
        let from_ring: Vec<_> = input.iter().map(|_| ring.dequeue().unwrap()).collect();
        prop_assert_eq!(&input, &from_linked);
        prop_assert_eq!(&input, &from_ring);
    }

    #[test]
    fn linked_queue_matches_model(ops in proptest::collection::vec(op(), 0..128)) {
        check_against_model(LinkedQueue::new(), None, &ops);
    }

    #[test]
    fn bounded_queue_matches_model(
        capacity in 1usize..8,
        ops in proptest::collection::vec(op(), 0..128),
    ) {
        check_against_model(BoundedQueue::new(capacity).unwrap(), Some(capacity), &ops);
    }

    #[test]
    fn inspections_leave_the_queue_unchanged(
        input in proptest::collection::vec(-50i32..50, 1..40),
        target in -50i32..50,
    ) {
        let mut queue = bounded(&input);
        search::contains(&mut queue, &target).unwrap();
        search::position(&mut queue, &target).unwrap();
        search::count(&mut queue, &target).unwrap();
        recursive::contains(&mut queue, &target).unwrap();
        recursive::max(&mut queue).unwrap();
        recursive::min(&mut queue).unwrap();
        prop_assert_eq!(Ok(input.iter().sum::<i32>()), recursive::sum(&mut queue));
        recursive::visit_in_order(&mut queue, |_| ()).unwrap();
        recursive::visit_reversed(&mut queue, |_| ()).unwrap();
        prop_assert_eq!(&input, &values(&queue));
        prop_assert!(queue.is_full());
    }

    #[test]
    fn searches_agree_with_slices(
        input in proptest::collection::vec(0i32..10, 0..40),
        target in 0i32..10,
    ) {
        let mut queue: LinkedQueue<_> = input.iter().copied().collect();
        let expected_count = input.iter().filter(|&&v| v == target).count();
        prop_assert_eq!(expected_count, search::count(&mut queue, &target).unwrap());
        prop_assert_eq!(
            input.iter().rposition(|&v| v == target),
            search::position(&mut queue, &target).unwrap()
        );
        prop_assert_eq!(input.contains(&target), search::contains(&mut queue, &target).unwrap());
        prop_assert_eq!(input.contains(&target), recursive::contains(&mut queue, &target).unwrap());
    }

    #[test]
    fn reverse_is_an_involution(input in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut queue: LinkedQueue<_> = input.iter().copied().collect();
        recursive::reverse(&mut queue).unwrap();
        let mut reversed = input.clone();
        reversed.reverse();
        prop_assert_eq!(&reversed, &values(&queue));
        recursive::reverse(&mut queue).unwrap();
        prop_assert_eq!(&input, &values(&queue));
    }

    #[test]
    fn sorted_merge_is_sorted_and_complete(
        mut a in proptest::collection::vec(any::<i32>(), 0..32),
        mut b in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        a.sort();
        b.sort();
        let q1: LinkedQueue<_> = a.iter().copied().collect();
        let q2 = bounded(&b);
        let merged = values(&merge::sorted(&q1, &q2));
        let mut expected = [a.as_slice(), b.as_slice()].concat();
        expected.sort();
        prop_assert_eq!(expected, merged);
        prop_assert_eq!(&b, &values(&q2));
    }

    #[test]
    fn interleave_keeps_every_value(
        a in proptest::collection::vec(any::<i32>(), 0..32),
        b in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        let q1: LinkedQueue<_> = a.iter().copied().collect();
        let q2: LinkedQueue<_> = b.iter().copied().collect();
        let merged = values(&merge::interleaved(&q1, &q2));
        prop_assert_eq!(a.len() + b.len(), merged.len());
        let shared = a.len().min(b.len());
        for i in 0..shared {
            prop_assert_eq!(a[i], merged[2 * i]);
            prop_assert_eq!(b[i], merged[2 * i + 1]);
        }
    }
}

#[test]
fn sixth_enqueue_on_a_queue_of_five_is_rejected() {
    let mut queue = BoundedQueue::new(5).unwrap();
    for v in [10, 20, 30, 40, 50] {
        queue.enqueue(v).unwrap();
    }
    let err = queue.enqueue(60).unwrap_err();
    assert_eq!(QueueError::CapacityExceeded { capacity: 5 }, QueueError::from(err));
    assert_eq!(5, queue.len());
}

#[test]
fn merges_from_the_documentation() {
    let q1: LinkedQueue<_> = ['a', 'b', 'c'].into_iter().collect();
    let q2: LinkedQueue<_> = ['d', 'e'].into_iter().collect();
    let merged: String = merge::concat_preserving(&q1, &q2).into_iter().collect();
    assert_eq!("abcde", merged);
    assert_eq!(3, q1.len());
    assert_eq!(2, q2.len());

    let mut queue: LinkedQueue<_> = [10, 20, 10, 30, 10, 40].into_iter().collect();
    assert_eq!(Ok(3), search::count(&mut queue, &10));
    assert_eq!(Ok(Some(4)), search::position(&mut queue, &10));
    assert_eq!(vec![10, 20, 10, 30, 10, 40], values(&queue));
}
