use rand::{distributions::Alphanumeric, prelude::ThreadRng, Rng};

pub trait Random {
    fn gen(rng: &mut ThreadRng) -> Self;
}

const RANDOM_STRING_MIN: usize = 0;
const RANDOM_STRING_MAX: usize = 10;

// keys of small range collide often, which exercises the duplicate paths
const RANDOM_SMALL_MAX: i32 = 1 << 12;

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for u64 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen()
    }
}

impl Random for i32 {
    // get random integer in [-RANDOM_SMALL_MAX, RANDOM_SMALL_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen_range(-RANDOM_SMALL_MAX..RANDOM_SMALL_MAX)
    }
}
