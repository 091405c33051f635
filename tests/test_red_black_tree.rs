use rand::Rng;
use rbtree_set::red_black_tree::RedBlackSet;
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 20_000;
const KEY_SPACE: u32 = 1_000;

fn init_logger() {
    // several tests may race to install the logger; only the first succeeds
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());
}

fn assert_height_bound(set: &RedBlackSet<u32>) {
    let bound = 2.0 * ((set.len() + 1) as f64).log2();
    assert!(
        set.height() as f64 <= bound,
        "height {} exceeds bound {} for {} keys",
        set.height(),
        bound,
        set.len(),
    );
}

#[test]
fn int_test_red_black_set() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_SPACE);

        if rng.gen_range(0, 3) < 2 {
            assert_eq!(set.insert(key), expected.insert(key));
        } else {
            assert_eq!(set.remove(&key), expected.remove(&key));
        }

        if let Err(error) = set.validate() {
            panic!("invalid tree after operation on {}: {}", key, error);
        }
        assert_eq!(set.len(), expected.len());
        assert_eq!(set.min(), expected.iter().next());
        assert_eq!(set.max(), expected.iter().next_back());
        assert_height_bound(&set);
    }

    for key in 0..KEY_SPACE {
        assert_eq!(set.contains(&key), expected.contains(&key));
        assert_eq!(set.floor(&key), expected.range(..=key).next_back());
        assert_eq!(set.ceil(&key), expected.range(key..).next());
    }
}

#[test]
fn int_test_red_black_set_drain() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut keys = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u32>();
        if set.insert(key) {
            keys.push(key);
        }
    }
    assert_eq!(set.len(), keys.len());
    assert_height_bound(&set);

    rng.shuffle(&mut keys);
    for (i, key) in keys.iter().enumerate() {
        assert!(set.remove(key));
        assert!(!set.remove(key));
        if i % 64 == 0 {
            assert!(set.validate().is_ok());
        }
    }

    assert!(set.is_empty());
    assert_eq!(set.validate(), Ok(1));
}
