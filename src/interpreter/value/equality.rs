/// The two notions of sameness the `eq?` and `equal?` primitives expose.
///
/// `is_eq` is identity: atoms compare by value, lists and procedures by reference.
/// `is_equal` is structural, with numbers compared numerically.
pub trait Equality<T> {
    fn is_eq(&self, other: &T) -> bool;
    fn is_equal(&self, other: &T) -> bool;
}
