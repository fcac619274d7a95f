use mu::{check, Outcome};

fn vec_len_and_capacity() -> Outcome {
    let mut vec = vec![0usize; 5];

    check!(vec.len() == 5);
    check!(vec.capacity() >= 5);

    vec.resize(10, 0);

    check!(vec.len() == 10);
    check!(vec.capacity() >= 10);

    Outcome::passed()
}

fn string_join() -> Outcome {
    let joined = ["a", "b", "c"].join("-");
    check!(joined == "a-b-c", "unexpected join: {}", joined);
    Outcome::passed()
}

fn saturating_math() -> Outcome {
    check!(u8::MAX.saturating_add(1) == u8::MAX);
    check!(0u8.saturating_sub(1) == 0);
    Outcome::passed()
}

mu::test_main![vec_len_and_capacity, string_join, saturating_math];
