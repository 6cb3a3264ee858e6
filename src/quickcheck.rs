use ::quickcheck::{Arbitrary, Gen};
use compare::Compare;
use super::LinkedBst;

/// Trees are generated by adding the items of an arbitrary vector in order, so their shapes
/// range from balanced to fully degenerate. Shrinking preserves pre-order, which rebuilds the
/// same shape for distinct items.
impl<T, C> Arbitrary for LinkedBst<T, C>
    where T: Arbitrary, C: 'static + Clone + Compare<T> + Default + Send {

    fn arbitrary(g: &mut Gen) -> Self { Vec::<T>::arbitrary(g).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<T> = self.preorder().cloned().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
