mod properties;

use quickcheck::{Arbitrary, Gen};

use intbst::Key;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Add the key to the tree
    Add(Key),
    /// Collect the keys in the inclusive range
    Range(Key, Key),
}

/// Keys are drawn from the `i8` range so that ranges hit added keys often.
fn small_key(g: &mut Gen) -> Key {
    Key::from(i8::arbitrary(g))
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Add(small_key(g)),
            1 => Op::Range(small_key(g), small_key(g)),
            _ => unreachable!(),
        }
    }
}
