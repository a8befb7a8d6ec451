use quickcheck::{Arbitrary, Gen};

/// One step of a randomly generated workload run against a tree and a reference map.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K, V> {
    /// Insert the K, V. Rejected if K is already present.
    Insert(K, V),
    /// Delete K.
    Remove(K),
    /// Walk the tree both ways and compare with the reference map.
    Iter,
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    /// Inserts are drawn twice as often as the other operations so the trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
