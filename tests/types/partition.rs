use error_trail::{
    err, ok, partition_results, AggregateError, ChainedError, Outcome, PartitionedErrors,
    PartitionedResults,
};
use std::cell::Cell;
use std::io;

fn failure<T>(message: &str) -> Outcome<T> {
    err(io::Error::other(message.to_string()))
}

#[test]
fn single_failure_is_reported_alone() {
    let partitioned = partition_results(vec![ok(1), failure("bad row"), ok(3)]);

    assert_eq!(partitioned.data(), &[1, 3]);
    match partitioned.errors() {
        Some(PartitionedErrors::Single(chain)) => assert_eq!(chain.message(), "bad row"),
        other => panic!("expected a single error, got {other:?}"),
    }
}

#[test]
fn all_successes_have_no_errors() {
    let partitioned = partition_results(vec![ok("a"), ok("b")]);

    assert_eq!(partitioned.data(), &["a", "b"]);
    assert!(partitioned.errors().is_none());
    assert!(partitioned.is_clean());
}

#[test]
fn several_failures_aggregate_in_order() {
    let partitioned: PartitionedResults<u8> =
        partition_results(vec![failure("first"), ok(2), failure("second"), failure("third")]);

    assert_eq!(partitioned.data(), &[2]);
    let Some(PartitionedErrors::Aggregate(aggregate)) = partitioned.errors() else {
        panic!("expected an aggregate error");
    };

    let messages: Vec<_> = aggregate.iter().map(ChainedError::message).collect();
    assert_eq!(messages, ["first", "second", "third"]);
    assert_eq!(aggregate.len(), 3);
    assert_eq!(aggregate.to_string(), "3 errors occurred: first; second; third");
}

#[test]
fn empty_batch_partitions_to_nothing() {
    let partitioned = partition_results(Vec::<Outcome<u8>>::new());

    assert!(partitioned.data().is_empty());
    assert!(partitioned.errors().is_none());
}

#[test]
fn every_input_is_consumed() {
    let visited = Cell::new(0);
    let inputs = (0..6).map(|i| {
        visited.set(visited.get() + 1);
        if i % 2 == 0 {
            ok(i)
        } else {
            failure(&format!("odd {i}"))
        }
    });

    let partitioned = partition_results(inputs);

    assert_eq!(visited.get(), 6);
    assert_eq!(partitioned.data(), &[0, 2, 4]);
    assert_eq!(partitioned.errors().map(PartitionedErrors::len), Some(3));
}

#[test]
fn collect_builds_a_partition() {
    let partitioned: PartitionedResults<usize> = ["ab", "", "abc"]
        .into_iter()
        .map(|s| if s.is_empty() { failure("empty") } else { ok(s.len()) })
        .collect();

    let (data, errors) = partitioned.into_parts();
    assert_eq!(data, vec![2, 3]);
    let errors = errors.unwrap().into_vec();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "empty");
}

#[test]
fn collect_sizes_data_from_lower_bound() {
    let partitioned: PartitionedResults<u32> =
        (0..10_000u32).filter(|n| n % 5_000 == 0).map(ok).collect();

    let (data, errors) = partitioned.into_parts();
    assert_eq!(data, vec![0, 5_000]);
    assert!(errors.is_none());
    assert!(data.capacity() < 100, "over-allocated: {}", data.capacity());
}

#[test]
fn partitioned_errors_expose_a_uniform_slice() {
    let single = PartitionedErrors::Single(failure::<()>("only").into_error().unwrap());
    assert_eq!(single.as_slice().len(), 1);
    assert!(!single.is_empty());
    assert_eq!(single.to_string(), "only");

    let aggregate = PartitionedErrors::Aggregate(AggregateError::new(vec![
        failure::<()>("x").into_error().unwrap(),
        failure::<()>("y").into_error().unwrap(),
    ]));
    let messages: Vec<_> = aggregate.iter().map(|e| e.message()).collect();
    assert_eq!(messages, ["x", "y"]);
    assert_eq!(aggregate.to_string(), "2 errors occurred: x; y");
}

#[test]
fn from_parts_classifies_error_count() {
    let none = PartitionedResults::<u8>::from_parts(vec![1], vec![]);
    assert!(none.errors().is_none());

    let two = PartitionedResults::<u8>::from_parts(
        vec![],
        vec![
            failure::<()>("a").into_error().unwrap(),
            failure::<()>("b").into_error().unwrap(),
        ],
    );
    assert!(matches!(two.errors(), Some(PartitionedErrors::Aggregate(a)) if a.len() == 2));
}
