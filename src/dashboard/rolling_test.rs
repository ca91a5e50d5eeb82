use super::*;

#[test]
fn new_buffer_is_empty_with_requested_capacity() {
    let buf: RollingBuffer<f64> = RollingBuffer::new(20);
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 20);
    assert_eq!(buf.latest(), None);
}

#[test]
fn zero_capacity_is_bumped_to_one() {
    let mut buf = RollingBuffer::new(0);
    buf.push(1);
    assert_eq!(buf.to_vec(), vec![1]);
    assert_eq!(buf.push(2), Some(1));
}

#[test]
fn push_below_capacity_evicts_nothing() {
    let mut buf = RollingBuffer::new(3);
    assert_eq!(buf.push(1), None);
    assert_eq!(buf.push(2), None);
    assert_eq!(buf.to_vec(), vec![1, 2]);
}

#[test]
fn twenty_first_push_evicts_the_first() {
    let mut buf = RollingBuffer::new(20);
    for i in 1..=20 {
        assert_eq!(buf.push(i), None);
    }
    assert_eq!(buf.push(21), Some(1));
    assert_eq!(buf.len(), 20);
    let values = buf.to_vec();
    assert!(!values.contains(&1));
    assert!(values.contains(&21));
    assert_eq!(values.first(), Some(&2));
    assert_eq!(buf.latest(), Some(&21));
}

#[test]
fn length_never_exceeds_capacity() {
    let mut buf = RollingBuffer::new(20);
    for i in 0..500 {
        buf.push(i);
        assert!(buf.len() <= 20);
    }
    assert_eq!(buf.iter().copied().collect::<Vec<_>>(), (480..500).collect::<Vec<_>>());
}
